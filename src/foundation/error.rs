/// Convenience result type used across the crate.
pub type RigResult<T> = Result<T, RigError>;

/// Top-level error taxonomy for the rig-building pipeline.
#[derive(thiserror::Error, Debug)]
pub enum RigError {
    /// Invalid settings, missing handles, or an incomplete skeleton.
    #[error("validation error: {0}")]
    Validation(String),

    /// Mesh production or measurement failed.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Keyframe tracks were built or sampled incorrectly.
    #[error("animation error: {0}")]
    Animation(String),

    /// Pose evaluation failed for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RigError {
    /// Build a [`RigError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RigError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`RigError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`RigError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`RigError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
