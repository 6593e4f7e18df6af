use super::*;
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::host::MemoryHost;

#[test]
fn from_bounds_takes_extents_and_bottom_center() {
    let b = Aabb3 {
        min: DVec3::new(-0.5, 0.0, 0.0),
        max: DVec3::new(0.5, 0.2, 2.0),
    };
    let m = Measurements::from_bounds(&b, |p| p + DVec3::new(3.0, 0.0, 1.0));
    assert_eq!(m.width, 1.0);
    assert_eq!(m.height, 2.0);
    assert_eq!(m.footprint_center, DVec3::new(3.0, 0.1, 1.0));
}

#[test]
fn flat_box_measures_to_zero() {
    let b = Aabb3 {
        min: DVec3::ONE,
        max: DVec3::ONE,
    };
    let m = Measurements::from_bounds(&b, |p| p);
    assert_eq!((m.width, m.height), (0.0, 0.0));
}

#[test]
fn measuring_the_glyph_moves_its_origin_to_the_footprint() {
    let mut host = MemoryHost::new();
    host.reset(FrameRange::inclusive(FrameIndex(1), FrameIndex(40)).unwrap())
        .unwrap();
    let h = host.text_to_mesh("T_mesh", 'T', 0.15).unwrap();
    let before = host.mesh(h).unwrap().world_vertices();

    let m = measure_mesh(&mut host, h).unwrap();
    assert!((m.width - 0.62).abs() < 1e-12);
    assert!((m.height - 0.72).abs() < 1e-12);
    assert!(m.footprint_center.distance(DVec3::new(0.0, 0.075, 0.0)) < 1e-12);

    let mesh = host.mesh(h).unwrap();
    assert_eq!(mesh.location, m.footprint_center);
    for (a, b) in before.iter().zip(mesh.world_vertices()) {
        assert!(a.distance(b) < 1e-12);
    }
    // Local space now reads as height above the footprint.
    assert!(mesh.local_bounds().unwrap().min.z.abs() < 1e-12);
}
