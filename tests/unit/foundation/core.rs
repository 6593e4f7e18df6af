use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn inclusive_playback_range_covers_last_frame() {
    let r = FrameRange::inclusive(FrameIndex(1), FrameIndex(40)).unwrap();
    assert_eq!(r.len_frames(), 40);
    assert_eq!(r.last(), Some(FrameIndex(40)));
    assert!(r.contains(FrameIndex(40)));
    assert!(!r.contains(FrameIndex(0)));
    assert_eq!(r.frames().count(), 40);
}

#[test]
fn inverted_ranges_are_rejected() {
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(2)).is_err());
    assert!(FrameRange::inclusive(FrameIndex(3), FrameIndex(2)).is_err());
}

#[test]
fn inclusive_range_rejects_unrepresentable_end() {
    let err = FrameRange::inclusive(FrameIndex(1), FrameIndex(u64::MAX)).unwrap_err();
    assert!(matches!(err, RigError::Validation(_)));
    let r = FrameRange::inclusive(FrameIndex(1), FrameIndex(u64::MAX - 1)).unwrap();
    assert_eq!(r.last(), Some(FrameIndex(u64::MAX - 1)));
}

#[test]
fn clamp_on_empty_range_returns_start() {
    let r = FrameRange::new(FrameIndex(7), FrameIndex(7)).unwrap();
    assert_eq!(r.last(), None);
    assert_eq!(r.clamp(FrameIndex(99)), FrameIndex(7));
}

#[test]
fn clamp_pins_to_last_inclusive_frame() {
    let r = FrameRange::inclusive(FrameIndex(1), FrameIndex(40)).unwrap();
    assert_eq!(r.clamp(FrameIndex(0)), FrameIndex(1));
    assert_eq!(r.clamp(FrameIndex(99)), FrameIndex(40));
}

#[test]
fn aabb_from_points_and_corners() {
    let pts = [
        DVec3::new(-1.0, 0.0, 2.0),
        DVec3::new(3.0, -2.0, 0.5),
        DVec3::new(0.0, 1.0, 0.0),
    ];
    let bb = Aabb3::from_points(&pts).unwrap();
    assert_eq!(bb.min, DVec3::new(-1.0, -2.0, 0.0));
    assert_eq!(bb.max, DVec3::new(3.0, 1.0, 2.0));
    assert_eq!(bb.size(), DVec3::new(4.0, 3.0, 2.0));
    assert_eq!(bb.corners()[0], bb.min);
    assert_eq!(bb.corners()[7], bb.max);
    assert!(Aabb3::from_points(&[] as &[DVec3]).is_none());
}
