use super::*;
use crate::rig::{
    measure::Measurements,
    skeleton::build_skeleton,
};
use crate::config::settings::SkeletonProportions;
use crate::foundation::core::FrameIndex;

fn ready_host() -> MemoryHost {
    let mut host = MemoryHost::new();
    host.reset(FrameRange::inclusive(FrameIndex(1), FrameIndex(40)).unwrap())
        .unwrap();
    host
}

#[test]
fn meshing_requires_a_reset_scene() {
    let mut host = MemoryHost::new();
    assert!(host.frame_range().is_none());
    let err = host.text_to_mesh("T_mesh", 'T', 0.15).unwrap_err();
    assert!(matches!(err, RigError::Validation(_)));
}

#[test]
fn reset_sets_range_and_clears_objects() {
    let mut host = ready_host();
    host.text_to_mesh("T_mesh", 'T', 0.15).unwrap();
    assert_eq!(host.mesh_count(), 1);

    let range = FrameRange::inclusive(FrameIndex(1), FrameIndex(24)).unwrap();
    host.reset(range).unwrap();
    assert_eq!(host.mesh_count(), 0);
    assert_eq!(host.frame_range(), Some(range));
    assert!(host.mesh(MeshHandle(0)).is_err());
}

#[test]
fn empty_playback_range_is_rejected() {
    let mut host = MemoryHost::new();
    let empty = FrameRange::new(FrameIndex(5), FrameIndex(5)).unwrap();
    assert!(host.reset(empty).is_err());
}

#[test]
fn glyph_mesh_stands_upright_with_thickness_along_y() {
    let mut host = ready_host();
    let h = host.text_to_mesh("T_mesh", 'T', 0.15).unwrap();
    let mesh = host.mesh(h).unwrap();
    assert_eq!(mesh.name, "T_mesh");
    assert_eq!(mesh.location, DVec3::ZERO);
    assert!(mesh.armature.is_none());

    let b = mesh.local_bounds().unwrap();
    assert!((b.size().y - 0.15).abs() < 1e-12);
    assert!(b.size().z > b.size().x);
    assert_eq!(b.min.z, 0.0);
}

#[test]
fn duplicate_object_names_are_rejected() {
    let mut host = ready_host();
    host.text_to_mesh("T_mesh", 'T', 0.15).unwrap();
    assert!(host.text_to_mesh("T_mesh", 'T', 0.15).is_err());
}

#[test]
fn relocating_origin_keeps_geometry_in_place() {
    let mut host = ready_host();
    let h = host.text_to_mesh("T_mesh", 'T', 0.15).unwrap();
    let before = host.mesh(h).unwrap().world_vertices();

    let pivot = DVec3::new(0.0, 0.075, 0.0);
    host.relocate_origin(h, pivot).unwrap();
    let mesh = host.mesh(h).unwrap();
    assert_eq!(mesh.location, pivot);
    for (a, b) in before.iter().zip(mesh.world_vertices()) {
        assert!(a.distance(b) < 1e-12);
    }
}

#[test]
fn binding_writes_one_group_per_bone_and_names_the_armature() {
    let mut host = ready_host();
    let h = host.text_to_mesh("T_mesh", 'T', 0.15).unwrap();
    let skeleton = build_skeleton(
        &Measurements::from_dimensions(0.62, 0.72),
        &SkeletonProportions::default(),
    )
    .unwrap();
    host.bind_automatic_weights(h, "T_rig", &skeleton, DVec3::ZERO)
        .unwrap();

    let mesh = host.mesh(h).unwrap();
    assert_eq!(mesh.armature.as_deref(), Some("T_rig"));
    assert_eq!(mesh.vertex_groups.len(), 8);
}

#[test]
fn unknown_handles_are_validation_errors() {
    let mut host = ready_host();
    let err = host.relocate_origin(MeshHandle(3), DVec3::ZERO).unwrap_err();
    assert!(matches!(err, RigError::Validation(_)));
}
