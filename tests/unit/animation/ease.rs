use super::*;

#[test]
fn endpoints_are_fixed() {
    for ease in [Ease::Linear, Ease::InOutCubic] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn in_out_cubic_is_symmetric_and_flat_at_keys() {
    let e = Ease::InOutCubic;
    assert_eq!(e.apply(0.5), 0.5);
    for t in [0.1, 0.25, 0.4] {
        assert!((e.apply(t) + e.apply(1.0 - t) - 1.0).abs() < 1e-12);
        assert!(e.apply(t) < Ease::Linear.apply(t));
    }
    // Slope near both ends vanishes.
    let h = 1e-4;
    assert!(e.apply(h) / h < 1e-6);
    assert!((1.0 - e.apply(1.0 - h)) / h < 1e-6);
}

#[test]
fn out_of_range_input_is_clamped() {
    assert_eq!(Ease::InOutCubic.apply(-1.0), 0.0);
    assert_eq!(Ease::InOutCubic.apply(2.0), 1.0);
    assert_eq!(Ease::Linear.apply(1.5), 1.0);
}
