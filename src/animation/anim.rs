use crate::{
    animation::ease::Ease,
    foundation::core::{DVec3, FrameIndex},
    foundation::error::{RigError, RigResult},
};

/// Values that can be blended between two keys.
pub trait Lerp: Sized {
    /// Blend from `a` (at `t = 0`) to `b` (at `t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for DVec3 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        DVec3::new(
            a.x + (b.x - a.x) * t,
            a.y + (b.y - a.y) * t,
            a.z + (b.z - a.z) * t,
        )
    }
}

/// Frame-indexed samples of one animated property.
///
/// Keys are kept in strictly increasing frame order; [`Keyframes::insert`]
/// refuses anything else, so a track can only ever be appended to.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    /// Keys sorted by frame, no duplicates.
    pub keys: Vec<Keyframe<T>>,
    /// Interpolation between consecutive keys.
    pub mode: InterpMode,
}

/// One keyed sample.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    /// Frame the value is keyed on.
    pub frame: FrameIndex,
    /// Keyed value.
    pub value: T,
    /// Easing applied toward the next key.
    pub ease: Ease,
}

/// How values between two keys are produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    /// Step: hold the earlier key until the next one.
    Hold,
    /// Eased blend between the surrounding keys.
    Linear,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    /// Empty track.
    pub fn new(mode: InterpMode) -> Self {
        Self {
            keys: Vec::new(),
            mode,
        }
    }

    /// Append one key. The frame must be strictly after the last keyed frame.
    pub fn insert(&mut self, frame: FrameIndex, value: T, ease: Ease) -> RigResult<()> {
        if let Some(last) = self.keys.last()
            && last.frame.0 >= frame.0
        {
            return Err(RigError::animation(format!(
                "key at frame {} does not follow key at frame {}",
                frame.0, last.frame.0
            )));
        }
        self.keys.push(Keyframe { frame, value, ease });
        Ok(())
    }

    /// Keyed frames in insertion order.
    pub fn frames(&self) -> impl Iterator<Item = FrameIndex> + '_ {
        self.keys.iter().map(|k| k.frame)
    }

    /// Value keyed exactly on `frame`, if any.
    pub fn value_at(&self, frame: FrameIndex) -> Option<&T> {
        self.keys
            .binary_search_by_key(&frame, |k| k.frame)
            .ok()
            .map(|i| &self.keys[i].value)
    }

    /// Check the ordering invariant on deserialized tracks.
    pub fn validate(&self) -> RigResult<()> {
        if self.keys.is_empty() {
            return Err(RigError::animation("Keyframes must have at least one key"));
        }
        if !self.keys.windows(2).all(|w| w[0].frame.0 < w[1].frame.0) {
            return Err(RigError::animation(
                "Keyframes keys must be strictly increasing by frame",
            ));
        }
        Ok(())
    }

    /// Value at `frame`; held constant before the first and after the last key.
    pub fn sample(&self, frame: FrameIndex) -> RigResult<T> {
        if self.keys.is_empty() {
            return Err(RigError::animation("Keyframes has no keys"));
        }

        let f = frame.0;
        let idx = self.keys.partition_point(|k| k.frame.0 <= f);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame.0.saturating_sub(a.frame.0);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let t = ((f - a.frame.0) as f64) / (denom as f64);
        let te = a.ease.apply(t);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, te)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
