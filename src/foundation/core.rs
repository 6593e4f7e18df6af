use crate::foundation::error::{RigError, RigResult};

pub use glam::{DAffine3, DMat3, DQuat, DVec3, EulerRot};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Integer frame index on the scene timeline (1-based in the default clip).
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Half-open frame range `[start, end)`.
pub struct FrameRange {
    /// First frame in the range.
    pub start: FrameIndex,
    /// One past the last frame.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> RigResult<Self> {
        if start.0 > end.0 {
            return Err(RigError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Build a range from an inclusive `[first, last]` pair, as playback ranges are usually stated.
    pub fn inclusive(first: FrameIndex, last: FrameIndex) -> RigResult<Self> {
        if first.0 > last.0 {
            return Err(RigError::validation("FrameRange first must be <= last"));
        }
        let end = last
            .0
            .checked_add(1)
            .ok_or_else(|| RigError::validation("FrameRange last frame is too large"))?;
        Ok(Self {
            start: first,
            end: FrameIndex(end),
        })
    }

    /// Number of frames in the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// True when the range holds no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Last frame inside the range, if any.
    pub fn last(self) -> Option<FrameIndex> {
        if self.is_empty() {
            None
        } else {
            Some(FrameIndex(self.end.0 - 1))
        }
    }

    /// True when `f` lies inside the range.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Clamp `f` into the range.
    pub fn clamp(self, f: FrameIndex) -> FrameIndex {
        match self.last() {
            Some(last) => FrameIndex(f.0.clamp(self.start.0, last.0)),
            None => self.start,
        }
    }

    /// Iterate every frame in order.
    pub fn frames(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..self.end.0).map(FrameIndex)
    }
}

/// Axis-aligned bounding box in some local space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Aabb3 {
    /// Component-wise minimum corner.
    pub min: DVec3,
    /// Component-wise maximum corner.
    pub max: DVec3,
}

impl Aabb3 {
    /// Smallest box enclosing `points`; `None` when there are no points.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a DVec3>) -> Option<Self> {
        let mut it = points.into_iter();
        let first = *it.next()?;
        let (min, max) = it.fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Self { min, max })
    }

    /// Extent along each axis.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// The eight corners, min corner first.
    pub fn corners(&self) -> [DVec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            DVec3::new(a.x, a.y, a.z),
            DVec3::new(b.x, a.y, a.z),
            DVec3::new(a.x, b.y, a.z),
            DVec3::new(b.x, b.y, a.z),
            DVec3::new(a.x, a.y, b.z),
            DVec3::new(b.x, a.y, b.z),
            DVec3::new(a.x, b.y, b.z),
            DVec3::new(b.x, b.y, b.z),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
