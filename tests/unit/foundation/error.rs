use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RigError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(RigError::geometry("x").to_string().contains("geometry error:"));
    assert!(
        RigError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        RigError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        RigError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RigError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
