/// Timing curve between two keys, applied to normalized time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Constant velocity.
    Linear,
    /// Cubic in-out: zero velocity at both keys, the stock jump timing.
    InOutCubic,
}

impl Ease {
    /// Remap `t` (clamped to `[0, 1]`); both ends are fixed points.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutCubic if t < 0.5 => 4.0 * t * t * t,
            Self::InOutCubic => {
                let u = 2.0 - 2.0 * t;
                1.0 - 0.5 * u * u * u
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
