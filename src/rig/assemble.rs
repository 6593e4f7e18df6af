use crate::{
    config::settings::IkSettings,
    foundation::core::DVec3,
    foundation::error::{RigError, RigResult},
    rig::constraint::{Constraint, ConstraintStack, Marker, MarkerId},
    rig::skeleton::{BoneId, Side, Skeleton},
};

/// Skeleton object with its markers and constraint graph attached.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rig {
    /// Object name of the skeleton.
    pub name: String,
    /// Rest location of the skeleton object in world space.
    pub location: DVec3,
    /// Finalized bone tree.
    pub skeleton: Skeleton,
    /// Markers in [`MarkerId::ALL`] order, located in the skeleton's frame.
    pub markers: Vec<Marker>,
    /// One stack per bone in [`BoneId::ALL`] order.
    pub stacks: Vec<ConstraintStack>,
}

impl Rig {
    /// Marker record for `id`.
    pub fn marker(&self, id: MarkerId) -> &Marker {
        &self.markers[id.index()]
    }

    /// Constraint stack of `bone`, in evaluation order.
    pub fn constraints(&self, bone: BoneId) -> &[Constraint] {
        &self.stacks[bone.index()].constraints
    }

    /// Total number of attached constraints.
    pub fn constraint_count(&self) -> usize {
        self.stacks.iter().map(|s| s.constraints.len()).sum()
    }

    /// Check topology, marker slots, and every constraint.
    pub fn validate(&self) -> RigResult<()> {
        self.skeleton.validate()?;
        if self.markers.len() != MarkerId::ALL.len()
            || self.markers.iter().zip(MarkerId::ALL).any(|(m, id)| m.id != id)
        {
            return Err(RigError::validation(format!(
                "rig '{}' markers are incomplete or out of order",
                self.name
            )));
        }
        if self.stacks.len() != BoneId::ALL.len()
            || self.stacks.iter().zip(BoneId::ALL).any(|(s, id)| s.owner != id)
        {
            return Err(RigError::validation(format!(
                "rig '{}' constraint stacks are incomplete or out of order",
                self.name
            )));
        }
        for stack in &self.stacks {
            for c in &stack.constraints {
                c.validate(stack.owner)?;
            }
        }
        Ok(())
    }
}

/// Tail of the terminal arm bone on `side`, in the skeleton's frame.
pub fn ik_anchor(skeleton: &Skeleton, side: Side) -> DVec3 {
    let tip = match side {
        Side::Left => BoneId::ArmL2,
        Side::Right => BoneId::ArmR2,
    };
    skeleton.bone(tip).tail
}

/// Attach markers and the constraint graph to a finalized skeleton.
///
/// - IK targets sit on the arm tips, poles are pushed along depth
///   (`+` left, `-` right) to fix the elbow bend.
/// - Every bone gets a symmetric rotation limit.
/// - `spine_2` copies `spine_1` and `spine_3` copies `spine_2` at the
///   configured influences.
/// - Each forearm owns a two-bone IK constraint aimed at its side's markers.
#[tracing::instrument(skip(skeleton, ik))]
pub fn assemble_ik_rig(name: &str, skeleton: Skeleton, ik: &IkSettings) -> RigResult<Rig> {
    let mut markers = Vec::with_capacity(MarkerId::ALL.len());
    for side in Side::BOTH {
        markers.push(Marker {
            id: MarkerId::target(side),
            location: ik_anchor(&skeleton, side),
        });
    }
    for side in Side::BOTH {
        markers.push(Marker {
            id: MarkerId::pole(side),
            location: ik_anchor(&skeleton, side)
                + DVec3::new(0.0, side.twist() * ik.pole_offset, 0.0),
        });
    }
    markers.sort_by_key(|m| m.id);

    let limit = Constraint::symmetric_limit(ik.rotation_limit_deg.to_radians());
    let mut stacks: Vec<ConstraintStack> = BoneId::ALL
        .into_iter()
        .map(|owner| ConstraintStack {
            owner,
            constraints: vec![limit.clone()],
        })
        .collect();

    let copies = [
        (BoneId::Spine2, BoneId::Spine1, ik.spine_copy_influence[0]),
        (BoneId::Spine3, BoneId::Spine2, ik.spine_copy_influence[1]),
    ];
    for (owner, source, influence) in copies {
        stacks[owner.index()]
            .constraints
            .push(Constraint::CopyRotation { source, influence });
    }

    for side in Side::BOTH {
        let owner = BoneId::arm(side, 2)
            .ok_or_else(|| RigError::validation("arm chain has no terminal bone"))?;
        stacks[owner.index()].constraints.push(Constraint::Ik {
            target: MarkerId::target(side),
            pole: MarkerId::pole(side),
            pole_angle: side.twist() * ik.pole_angle_deg.to_radians(),
            chain_length: ik.chain_length,
            use_stretch: ik.use_stretch,
        });
    }

    let rig = Rig {
        name: name.to_string(),
        location: DVec3::ZERO,
        skeleton,
        markers,
        stacks,
    };
    rig.validate()?;
    tracing::debug!(
        markers = rig.markers.len(),
        constraints = rig.constraint_count(),
        "ik rig assembled"
    );
    Ok(rig)
}

#[cfg(test)]
#[path = "../../tests/unit/rig/assemble.rs"]
mod tests;
