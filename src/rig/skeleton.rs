use crate::{
    config::settings::SkeletonProportions,
    foundation::core::{DQuat, DVec3},
    foundation::error::{RigError, RigResult},
    rig::measure::Measurements,
};

/// Closed set of bones in the jump rig, in parent-before-child order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum BoneId {
    /// Ground-level root of the tree.
    #[serde(rename = "root")]
    Root,
    /// Lower spine segment.
    #[serde(rename = "spine_1")]
    Spine1,
    /// Middle spine segment.
    #[serde(rename = "spine_2")]
    Spine2,
    /// Upper spine segment; both arms hang off its tail.
    #[serde(rename = "spine_3")]
    Spine3,
    /// Left upper arm.
    #[serde(rename = "arm_L_1")]
    ArmL1,
    /// Left forearm, tip of the left IK chain.
    #[serde(rename = "arm_L_2")]
    ArmL2,
    /// Right upper arm.
    #[serde(rename = "arm_R_1")]
    ArmR1,
    /// Right forearm, tip of the right IK chain.
    #[serde(rename = "arm_R_2")]
    ArmR2,
}

/// Number of bones in the rig.
pub const BONE_COUNT: usize = 8;

impl BoneId {
    /// All bones, parents first.
    pub const ALL: [BoneId; BONE_COUNT] = [
        BoneId::Root,
        BoneId::Spine1,
        BoneId::Spine2,
        BoneId::Spine3,
        BoneId::ArmL1,
        BoneId::ArmL2,
        BoneId::ArmR1,
        BoneId::ArmR2,
    ];

    /// Host-facing bone name.
    pub fn name(self) -> &'static str {
        match self {
            BoneId::Root => "root",
            BoneId::Spine1 => "spine_1",
            BoneId::Spine2 => "spine_2",
            BoneId::Spine3 => "spine_3",
            BoneId::ArmL1 => "arm_L_1",
            BoneId::ArmL2 => "arm_L_2",
            BoneId::ArmR1 => "arm_R_1",
            BoneId::ArmR2 => "arm_R_2",
        }
    }

    /// Position in [`BoneId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parent in the fixed topology.
    pub fn parent(self) -> Option<BoneId> {
        match self {
            BoneId::Root => None,
            BoneId::Spine1 => Some(BoneId::Root),
            BoneId::Spine2 => Some(BoneId::Spine1),
            BoneId::Spine3 => Some(BoneId::Spine2),
            BoneId::ArmL1 | BoneId::ArmR1 => Some(BoneId::Spine3),
            BoneId::ArmL2 => Some(BoneId::ArmL1),
            BoneId::ArmR2 => Some(BoneId::ArmR1),
        }
    }

    /// Arm segment `1` (upper) or `2` (fore) on `side`.
    pub fn arm(side: Side, segment: u8) -> Option<BoneId> {
        match (side, segment) {
            (Side::Left, 1) => Some(BoneId::ArmL1),
            (Side::Left, 2) => Some(BoneId::ArmL2),
            (Side::Right, 1) => Some(BoneId::ArmR1),
            (Side::Right, 2) => Some(BoneId::ArmR2),
            _ => None,
        }
    }
}

/// Body side of a mirrored arm chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    /// Toward -X.
    Left,
    /// Toward +X.
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Sign of the lateral (X) axis on this side.
    pub fn lateral(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    /// Sign used for depth offsets, roll, and pole angle on this side.
    pub fn twist(self) -> f64 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// One rest-pose bone in skeleton-local space.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bone {
    /// Which bone this is.
    pub id: BoneId,
    /// Start point.
    pub head: DVec3,
    /// End point.
    pub tail: DVec3,
    /// Parent bone; the skeleton owns every bone.
    pub parent: Option<BoneId>,
    /// Twist about the head->tail axis, radians.
    pub roll: f64,
}

impl Bone {
    /// Distance from head to tail.
    pub fn length(&self) -> f64 {
        (self.tail - self.head).length()
    }

    /// Unit head->tail direction; `+Y` for zero-length bones.
    pub fn direction(&self) -> DVec3 {
        let d = (self.tail - self.head).normalize_or_zero();
        if d == DVec3::ZERO { DVec3::Y } else { d }
    }

    /// Rest orientation: local `+Y` along the bone, local `X` twisted by `roll`.
    pub fn rest_rotation(&self) -> DQuat {
        let dir = self.direction();
        DQuat::from_axis_angle(dir, self.roll) * DQuat::from_rotation_arc(DVec3::Y, dir)
    }
}

/// Finalized bone tree. Topology cannot change once this value exists.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Skeleton {
    bones: Vec<Bone>,
}

impl Skeleton {
    /// Bone record for `id`.
    pub fn bone(&self, id: BoneId) -> &Bone {
        &self.bones[id.index()]
    }

    /// Bones in parent-before-child order.
    pub fn bones(&self) -> impl Iterator<Item = &Bone> {
        self.bones.iter()
    }

    /// Direct children of `id`.
    pub fn children(&self, id: BoneId) -> impl Iterator<Item = BoneId> + '_ {
        self.bones
            .iter()
            .filter(move |b| b.parent == Some(id))
            .map(|b| b.id)
    }

    /// Re-check the invariants the builder enforces; used on deserialized skeletons.
    pub fn validate(&self) -> RigResult<()> {
        if self.bones.len() != BONE_COUNT {
            return Err(RigError::validation(format!(
                "skeleton must have {BONE_COUNT} bones, got {}",
                self.bones.len()
            )));
        }
        for (bone, id) in self.bones.iter().zip(BoneId::ALL) {
            if bone.id != id {
                return Err(RigError::validation(format!(
                    "bone slot '{}' holds '{}'",
                    id.name(),
                    bone.id.name()
                )));
            }
            if bone.parent != id.parent() {
                return Err(RigError::validation(format!(
                    "bone '{}' has the wrong parent",
                    id.name()
                )));
            }
        }
        Ok(())
    }
}

/// Bone-definition phase; [`SkeletonBuilder::finish`] yields the immutable [`Skeleton`].
#[derive(Clone, Debug, Default)]
pub struct SkeletonBuilder {
    slots: [Option<Bone>; BONE_COUNT],
}

impl SkeletonBuilder {
    /// Empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a parentless bone at explicit head/tail.
    pub fn root(mut self, id: BoneId, head: DVec3, tail: DVec3) -> RigResult<Self> {
        if id.parent().is_some() {
            return Err(RigError::validation(format!(
                "bone '{}' has a parent and must be chained",
                id.name()
            )));
        }
        self.put(Bone {
            id,
            head,
            tail,
            parent: None,
            roll: 0.0,
        })?;
        Ok(self)
    }

    /// Define a child bone whose head is its parent's tail.
    pub fn chain(mut self, id: BoneId, tail: DVec3, roll: f64) -> RigResult<Self> {
        let parent = id.parent().ok_or_else(|| {
            RigError::validation(format!("bone '{}' has no parent to chain from", id.name()))
        })?;
        let head = self.slots[parent.index()]
            .as_ref()
            .map(|p| p.tail)
            .ok_or_else(|| {
                RigError::validation(format!(
                    "bone '{}' defined before its parent '{}'",
                    id.name(),
                    parent.name()
                ))
            })?;
        self.put(Bone {
            id,
            head,
            tail,
            parent: Some(parent),
            roll,
        })?;
        Ok(self)
    }

    fn put(&mut self, bone: Bone) -> RigResult<()> {
        let slot = &mut self.slots[bone.id.index()];
        if slot.is_some() {
            return Err(RigError::validation(format!(
                "bone '{}' defined twice",
                bone.id.name()
            )));
        }
        *slot = Some(bone);
        Ok(())
    }

    /// Close the definition phase. Fails if any bone is missing.
    pub fn finish(self) -> RigResult<Skeleton> {
        let mut bones = Vec::with_capacity(BONE_COUNT);
        for (slot, id) in self.slots.into_iter().zip(BoneId::ALL) {
            let bone = slot.ok_or_else(|| {
                RigError::validation(format!("bone '{}' was never defined", id.name()))
            })?;
            bones.push(bone);
        }
        let skeleton = Skeleton { bones };
        skeleton.validate()?;
        Ok(skeleton)
    }
}

/// Lay out the jump-rig skeleton from measured mesh extents.
#[tracing::instrument(skip(props))]
pub fn build_skeleton(m: &Measurements, props: &SkeletonProportions) -> RigResult<Skeleton> {
    let (w, h) = (m.width, m.height);
    let up = |frac: f64| DVec3::new(0.0, 0.0, frac * h);

    let mut b = SkeletonBuilder::new()
        .root(BoneId::Root, DVec3::ZERO, up(props.root_top))?
        .chain(BoneId::Spine1, up(props.spine_tops[0]), 0.0)?
        .chain(BoneId::Spine2, up(props.spine_tops[1]), 0.0)?
        .chain(BoneId::Spine3, up(props.spine_tops[2]), 0.0)?;

    let shoulder_z = props.spine_tops[2] * h;
    let roll = props.arm_roll_deg.to_radians();
    for side in Side::BOTH {
        for (segment, reach) in [(1u8, props.arm_reach[0]), (2u8, props.arm_reach[1])] {
            let id = BoneId::arm(side, segment)
                .ok_or_else(|| RigError::validation("arm segment out of range"))?;
            let tail = DVec3::new(
                side.lateral() * reach * w,
                side.twist() * props.depth_nudge,
                shoulder_z,
            );
            b = b.chain(id, tail, side.twist() * roll)?;
        }
    }

    let skeleton = b.finish()?;
    tracing::debug!(width = w, height = h, "skeleton laid out");
    Ok(skeleton)
}

#[cfg(test)]
#[path = "../../tests/unit/rig/skeleton.rs"]
mod tests;
