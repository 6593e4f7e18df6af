use super::*;

#[test]
fn defaults_match_stock_rig() {
    let s = RigSettings::default();
    assert_eq!(s.scene.frame_range().unwrap().len_frames(), 40);
    assert_eq!(s.scene.glyph, 'T');
    assert_eq!(s.scene.thickness, 0.15);
    assert_eq!(s.skeleton.spine_tops, [0.35, 0.65, 0.9]);
    assert_eq!(s.ik.spine_copy_influence, [0.3, 0.6]);
    assert_eq!(s.clip.root_lift[2], KeySpec::new(12, 0.85));
    assert_eq!(s.clip.arm_reach[2], KeySpec::new(14, 1.05));
    s.validate().unwrap();
}

#[test]
fn partial_json_keeps_other_defaults() {
    let s = RigSettings::from_json_str(r#"{ "skeleton": { "depth_nudge": 0.05 } }"#).unwrap();
    assert_eq!(s.skeleton.depth_nudge, 0.05);
    assert_eq!(s.skeleton.root_top, 0.1);
    assert_eq!(s.ik, IkSettings::default());
}

#[test]
fn json_roundtrip_preserves_settings() {
    let s = RigSettings::default();
    let text = serde_json::to_string_pretty(&s).unwrap();
    let back = RigSettings::from_json_str(&text).unwrap();
    assert_eq!(back, s);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = RigSettings::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, RigError::Serde(_)));
}

#[test]
fn validate_rejects_influence_out_of_range() {
    let mut s = RigSettings::default();
    s.ik.spine_copy_influence = [0.3, 1.5];
    assert!(s.validate().is_err());
}

#[test]
fn validate_rejects_non_increasing_keys() {
    let mut s = RigSettings::default();
    s.clip.root_lift = vec![KeySpec::new(6, 0.0), KeySpec::new(6, 0.5)];
    assert!(s.validate().is_err());
}

#[test]
fn validate_rejects_keys_outside_playback() {
    let mut s = RigSettings::default();
    s.clip.arm_reach.push(KeySpec::new(41, 0.9));
    assert!(s.validate().is_err());
}

#[test]
fn huge_last_frame_is_a_validation_error() {
    let err = RigSettings::from_json_str(r#"{"scene":{"frame_last":18446744073709551615}}"#)
        .unwrap_err();
    assert!(matches!(err, RigError::Validation(_)));
}

#[test]
fn validate_rejects_long_chains_and_bad_thickness() {
    let mut s = RigSettings::default();
    s.ik.chain_length = 3;
    assert!(s.validate().is_err());

    let mut s = RigSettings::default();
    s.scene.thickness = 0.0;
    assert!(s.validate().is_err());
}

#[test]
fn from_path_reports_missing_file() {
    let err = RigSettings::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
