use crate::{
    foundation::core::DVec3,
    foundation::error::{RigError, RigResult},
    rig::skeleton::{BoneId, Side},
};

/// Marker objects parented to the skeleton.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum MarkerId {
    /// Left hand IK goal.
    #[serde(rename = "ik_target_L")]
    IkTargetL,
    /// Right hand IK goal.
    #[serde(rename = "ik_target_R")]
    IkTargetR,
    /// Left elbow pole.
    #[serde(rename = "pole_L")]
    PoleL,
    /// Right elbow pole.
    #[serde(rename = "pole_R")]
    PoleR,
}

impl MarkerId {
    /// All markers, targets first.
    pub const ALL: [MarkerId; 4] = [
        MarkerId::IkTargetL,
        MarkerId::IkTargetR,
        MarkerId::PoleL,
        MarkerId::PoleR,
    ];

    /// Position in [`MarkerId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// IK goal marker of `side`.
    pub fn target(side: Side) -> Self {
        match side {
            Side::Left => MarkerId::IkTargetL,
            Side::Right => MarkerId::IkTargetR,
        }
    }

    /// Pole marker of `side`.
    pub fn pole(side: Side) -> Self {
        match side {
            Side::Left => MarkerId::PoleL,
            Side::Right => MarkerId::PoleR,
        }
    }

    /// Host-facing object name.
    pub fn name(self) -> &'static str {
        match self {
            MarkerId::IkTargetL => "ik_target_L",
            MarkerId::IkTargetR => "ik_target_R",
            MarkerId::PoleL => "pole_L",
            MarkerId::PoleR => "pole_R",
        }
    }
}

/// Lightweight object positioned in the skeleton's local frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Marker {
    /// Which marker this is.
    pub id: MarkerId,
    /// Rest location relative to the skeleton object.
    pub location: DVec3,
}

/// Constraint attached to exactly one owner bone; all spaces are bone-local.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Constraint {
    /// Clamp each local Euler axis into `[min, max]` radians.
    RotationLimit {
        /// Lower bound per axis.
        min: DVec3,
        /// Upper bound per axis.
        max: DVec3,
    },
    /// Blend the owner's local rotation toward `source`'s.
    CopyRotation {
        /// Bone whose local rotation is copied.
        source: BoneId,
        /// Blend weight in `[0, 1]`.
        influence: f64,
    },
    /// Two-bone IK ending at the owner.
    Ik {
        /// Goal for the chain tip.
        target: MarkerId,
        /// Point that picks the bend direction.
        pole: MarkerId,
        /// Twist of the chain about its axis relative to the pole, radians.
        pole_angle: f64,
        /// Bones in the chain, counted up from the owner.
        chain_length: u8,
        /// Whether the chain may stretch to reach the target.
        use_stretch: bool,
    },
}

impl Constraint {
    /// Rotation limit of `+-limit_rad` on all three axes.
    pub fn symmetric_limit(limit_rad: f64) -> Self {
        Constraint::RotationLimit {
            min: DVec3::splat(-limit_rad),
            max: DVec3::splat(limit_rad),
        }
    }

    /// Short kind label for logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Constraint::RotationLimit { .. } => "rotation_limit",
            Constraint::CopyRotation { .. } => "copy_rotation",
            Constraint::Ik { .. } => "ik",
        }
    }

    /// Check parameters against the owner bone.
    pub fn validate(&self, owner: BoneId) -> RigResult<()> {
        match self {
            Constraint::RotationLimit { min, max } => {
                if min.cmpgt(*max).any() {
                    return Err(RigError::validation(format!(
                        "rotation limit on '{}' has min > max",
                        owner.name()
                    )));
                }
            }
            Constraint::CopyRotation { source, influence } => {
                if *source == owner {
                    return Err(RigError::validation(format!(
                        "'{}' cannot copy its own rotation",
                        owner.name()
                    )));
                }
                // Sources must be evaluated before their owners.
                if source.index() > owner.index() {
                    return Err(RigError::validation(format!(
                        "'{}' copies '{}', which is evaluated later",
                        owner.name(),
                        source.name()
                    )));
                }
                if !(0.0..=1.0).contains(influence) {
                    return Err(RigError::validation(format!(
                        "copy-rotation influence {influence} on '{}' is outside [0, 1]",
                        owner.name()
                    )));
                }
            }
            Constraint::Ik {
                target,
                pole,
                chain_length,
                ..
            } => {
                if *chain_length != 2 {
                    return Err(RigError::validation(format!(
                        "IK on '{}' must span 2 bones, got {chain_length}",
                        owner.name()
                    )));
                }
                if owner.parent().is_none() {
                    return Err(RigError::validation(format!(
                        "IK on '{}' needs a parent bone to form a chain",
                        owner.name()
                    )));
                }
                if target == pole {
                    return Err(RigError::validation(format!(
                        "IK on '{}' uses '{}' as both target and pole",
                        owner.name(),
                        target.name()
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Ordered constraint stack of one bone.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConstraintStack {
    /// Bone the stack belongs to.
    pub owner: BoneId,
    /// Constraints in evaluation order.
    pub constraints: Vec<Constraint>,
}

#[cfg(test)]
#[path = "../../tests/unit/rig/constraint.rs"]
mod tests;
