use super::*;
use crate::config::settings::SkeletonProportions;
use crate::rig::{measure::Measurements, skeleton::build_skeleton};

fn skeleton() -> Skeleton {
    build_skeleton(
        &Measurements::from_dimensions(1.0, 2.0),
        &SkeletonProportions::default(),
    )
    .unwrap()
}

fn influences(groups: &[VertexGroup], vertex: u32) -> Vec<(BoneId, f64)> {
    groups
        .iter()
        .filter_map(|g| {
            g.weights
                .iter()
                .find(|(v, _)| *v == vertex)
                .map(|(_, w)| (g.bone, *w))
        })
        .collect()
}

#[test]
fn segment_distance_clamps_to_endpoints() {
    let (a, b) = (DVec3::ZERO, DVec3::new(0.0, 0.0, 1.0));
    assert_eq!(distance_to_segment(DVec3::new(1.0, 0.0, 0.5), a, b), 1.0);
    assert_eq!(distance_to_segment(DVec3::new(0.0, 0.0, 3.0), a, b), 2.0);
    assert_eq!(distance_to_segment(DVec3::new(0.0, 2.0, 0.0), a, a), 2.0);
}

#[test]
fn vertex_on_a_bone_is_dominated_by_it() {
    let groups = automatic_weights(&[DVec3::new(0.0, 0.0, 1.0)], &skeleton(), DVec3::ZERO);
    let inf = influences(&groups, 0);
    let (bone, w) = inf
        .iter()
        .copied()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();
    assert_eq!(bone, BoneId::Spine2);
    assert!(w > 0.99);
}

#[test]
fn each_vertex_keeps_at_most_four_normalized_influences() {
    let verts = [
        DVec3::new(-0.4, 0.0, 1.8),
        DVec3::new(0.3, 0.1, 0.5),
        DVec3::new(0.0, -0.2, 0.0),
        DVec3::new(5.0, 5.0, 5.0),
    ];
    let groups = automatic_weights(&verts, &skeleton(), DVec3::ZERO);
    assert_eq!(groups.len(), BoneId::ALL.len());
    for vi in 0..verts.len() as u32 {
        let inf = influences(&groups, vi);
        assert!(!inf.is_empty() && inf.len() <= MAX_INFLUENCES);
        let total: f64 = inf.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}

#[test]
fn rig_location_offsets_the_bones() {
    let offset = DVec3::new(10.0, 0.0, 0.0);
    let groups = automatic_weights(&[DVec3::new(10.0, 0.0, 1.0)], &skeleton(), offset);
    let inf = influences(&groups, 0);
    assert!(inf.iter().any(|&(b, w)| b == BoneId::Spine2 && w > 0.99));
}
