use super::*;
use crate::animation::ease::Ease;
use crate::config::settings::{IkSettings, SkeletonProportions};
use crate::rig::{assemble::assemble_ik_rig, skeleton::build_skeleton};

fn clip_for(width: f64, height: f64) -> Action {
    let m = Measurements::from_dimensions(width, height);
    let skeleton = build_skeleton(&m, &SkeletonProportions::default()).unwrap();
    let rig = assemble_ik_rig("T_rig", skeleton, &IkSettings::default()).unwrap();
    animate_jump(&m, &rig, &JumpClipSettings::default()).unwrap()
}

fn z_at(action: &Action, channel: Channel, frame: u64) -> f64 {
    action
        .track(channel)
        .unwrap()
        .keys
        .value_at(FrameIndex(frame))
        .unwrap()
        .z
}

#[test]
fn keys_four_tracks() {
    let a = clip_for(1.0, 2.0);
    assert_eq!(a.name, "T_rig_jump");
    let channels: Vec<_> = a.tracks.iter().map(|t| t.channel).collect();
    assert_eq!(
        channels,
        vec![
            Channel::ObjectLocation,
            Channel::BoneRotation(BoneId::Spine1),
            Channel::MarkerLocation(MarkerId::IkTargetL),
            Channel::MarkerLocation(MarkerId::IkTargetR),
        ]
    );
}

#[test]
fn root_lift_and_arm_reach_scale_with_height() {
    let a = clip_for(1.0, 2.0);
    assert_eq!(
        a.track(Channel::ObjectLocation)
            .unwrap()
            .keys
            .value_at(FrameIndex(12)),
        Some(&DVec3::new(0.0, 0.0, 1.7))
    );
    assert_eq!(z_at(&a, Channel::ObjectLocation, 6), -0.24);
    assert_eq!(z_at(&a, Channel::MarkerLocation(MarkerId::IkTargetL), 14), 2.1);
    assert_eq!(z_at(&a, Channel::MarkerLocation(MarkerId::IkTargetR), 14), 2.1);

    let tall = clip_for(1.0, 4.0);
    assert_eq!(z_at(&tall, Channel::ObjectLocation, 12), 3.4);
    assert_eq!(z_at(&tall, Channel::MarkerLocation(MarkerId::IkTargetL), 14), 4.2);
}

#[test]
fn targets_keep_their_rest_lateral_position() {
    let a = clip_for(1.0, 2.0);
    let left = a.track(Channel::MarkerLocation(MarkerId::IkTargetL)).unwrap();
    let right = a.track(Channel::MarkerLocation(MarkerId::IkTargetR)).unwrap();
    for (l, r) in left.keys.keys.iter().zip(&right.keys.keys) {
        assert_eq!(l.frame, r.frame);
        assert_eq!((l.value.x, l.value.y), (-0.5, 0.02));
        assert_eq!(r.value.x, -l.value.x);
        assert_eq!(r.value.y, -l.value.y);
        assert_eq!(r.value.z, l.value.z);
    }
}

#[test]
fn spine_pitch_is_radians_on_x_and_ignores_size() {
    let a = clip_for(1.0, 2.0);
    let b = clip_for(3.0, 7.0);
    let spine = Channel::BoneRotation(BoneId::Spine1);
    let keys = &a.track(spine).unwrap().keys;
    assert_eq!(
        keys.frames().map(|f| f.0).collect::<Vec<_>>(),
        vec![1, 6, 12, 18, 22]
    );
    assert_eq!(
        keys.value_at(FrameIndex(12)),
        Some(&DVec3::new(22f64.to_radians(), 0.0, 0.0))
    );
    assert_eq!(a.track(spine), b.track(spine));
}

#[test]
fn every_track_is_strictly_increasing() {
    let a = clip_for(0.62, 0.72);
    for t in &a.tracks {
        let frames: Vec<_> = t.keys.frames().collect();
        assert!(frames.windows(2).all(|w| w[0] < w[1]), "{:?}", t.channel);
        assert!(t.keys.keys.iter().all(|k| k.ease == Ease::InOutCubic));
    }
}

#[test]
fn duplicate_channels_fail_validation() {
    let mut a = clip_for(1.0, 2.0);
    let dup = a.tracks[0].clone();
    a.tracks.push(dup);
    let err = a.validate().unwrap_err();
    assert!(matches!(err, RigError::Animation(_)));
}

#[test]
fn unordered_tables_are_refused() {
    let m = Measurements::from_dimensions(1.0, 2.0);
    let skeleton = build_skeleton(&m, &SkeletonProportions::default()).unwrap();
    let rig = assemble_ik_rig("T_rig", skeleton, &IkSettings::default()).unwrap();
    let clip = JumpClipSettings {
        root_lift: vec![KeySpec::new(6, 0.0), KeySpec::new(1, 0.5)],
        ..JumpClipSettings::default()
    };
    assert!(animate_jump(&m, &rig, &clip).is_err());
}
