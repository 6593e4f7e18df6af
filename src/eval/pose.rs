use crate::{
    animation::jump::Channel,
    eval::ik::{TwoBoneChain, solve_two_bone},
    foundation::core::{DAffine3, DQuat, DVec3, EulerRot, FrameIndex},
    foundation::error::{RigError, RigResult},
    foundation::math::clamp_euler_xyz,
    rig::constraint::{Constraint, MarkerId},
    rig::skeleton::{BONE_COUNT, Bone, BoneId},
    scene::model::JumpRigScene,
};

/// World-space pose of one bone.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PosedBone {
    /// Which bone.
    pub id: BoneId,
    /// Posed head.
    pub head: DVec3,
    /// Posed tail.
    pub tail: DVec3,
    /// Local rotation after constraints, relative to the rest frame.
    pub rotation: DQuat,
}

/// World-space marker location.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PosedMarker {
    /// Which marker.
    pub id: MarkerId,
    /// Posed location.
    pub location: DVec3,
}

/// Fully resolved rig at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedPose {
    /// Evaluated frame.
    pub frame: FrameIndex,
    /// World location of the skeleton object.
    pub object_location: DVec3,
    /// Bones in [`BoneId::ALL`] order.
    pub bones: Vec<PosedBone>,
    /// Markers in [`MarkerId::ALL`] order.
    pub markers: Vec<PosedMarker>,
}

impl EvaluatedPose {
    /// Posed record of `id`.
    pub fn bone(&self, id: BoneId) -> &PosedBone {
        &self.bones[id.index()]
    }

    /// Posed record of `id`.
    pub fn marker(&self, id: MarkerId) -> &PosedMarker {
        &self.markers[id.index()]
    }
}

/// Samples the action and resolves the constraint graph for one frame.
pub struct PoseEvaluator;

impl PoseEvaluator {
    /// Evaluate `scene` at `frame`.
    ///
    /// Bones are posed parents first. Each bone runs its constraint stack in
    /// order; IK chains are solved when their upper bone is reached, then both
    /// chain bones are clamped by their rotation limits.
    #[tracing::instrument(skip(scene))]
    pub fn eval_frame(scene: &JumpRigScene, frame: FrameIndex) -> RigResult<EvaluatedPose> {
        if !scene.frame_range.contains(frame) {
            return Err(RigError::evaluation(format!(
                "frame {} is outside the playback range",
                frame.0
            )));
        }
        let rig = &scene.rig;
        let skeleton = &rig.skeleton;

        let object_location = match scene.action.track(Channel::ObjectLocation) {
            Some(t) => t.keys.sample(frame)?,
            None => rig.location,
        };

        let mut marker_local: Vec<DVec3> = rig.markers.iter().map(|m| m.location).collect();
        for id in MarkerId::ALL {
            if let Some(t) = scene.action.track(Channel::MarkerLocation(id)) {
                marker_local[id.index()] = t.keys.sample(frame)?;
            }
        }

        let mut basis = [DQuat::IDENTITY; BONE_COUNT];
        for id in BoneId::ALL {
            if let Some(t) = scene.action.track(Channel::BoneRotation(id)) {
                let e = t.keys.sample(frame)?;
                basis[id.index()] = DQuat::from_euler(EulerRot::XYZ, e.x, e.y, e.z);
            }
        }

        let mut local = [DQuat::IDENTITY; BONE_COUNT];
        let mut deform = [DAffine3::IDENTITY; BONE_COUNT];
        let mut solved: [Option<DQuat>; BONE_COUNT] = [None; BONE_COUNT];

        for bone in skeleton.bones() {
            let i = bone.id.index();
            let parent_deform = bone
                .parent
                .map_or(DAffine3::IDENTITY, |p| deform[p.index()]);
            let q = match solved[i] {
                Some(q) => q,
                None => apply_stack(rig.constraints(bone.id), basis[i], &local),
            };
            local[i] = q;
            deform[i] = parent_deform * bone_deform(bone, q);

            for child in skeleton.children(bone.id) {
                for c in rig.constraints(child) {
                    let Constraint::Ik {
                        target,
                        pole,
                        pole_angle,
                        ..
                    } = c
                    else {
                        continue;
                    };
                    let lower = skeleton.bone(child);
                    let chain = TwoBoneChain {
                        start: parent_deform.transform_point3(bone.head),
                        upper: bone.length(),
                        lower: lower.length(),
                        fallback_aim: deform[i].transform_vector3(bone.direction()),
                    };
                    let sol = solve_two_bone(
                        &chain,
                        marker_local[target.index()],
                        marker_local[pole.index()],
                        *pole_angle,
                    );

                    let parent_rot = DQuat::from_affine3(&parent_deform);
                    let q_upper = clamp_by_limits(
                        rig.constraints(bone.id),
                        bone.rest_rotation().inverse() * parent_rot.inverse() * sol.upper_frame,
                    );
                    local[i] = q_upper;
                    deform[i] = parent_deform * bone_deform(bone, q_upper);

                    let upper_rot = DQuat::from_affine3(&deform[i]);
                    let q_lower = clamp_by_limits(
                        rig.constraints(child),
                        lower.rest_rotation().inverse() * upper_rot.inverse() * sol.lower_frame,
                    );
                    solved[child.index()] = Some(q_lower);

                    let lower_deform = deform[i] * bone_deform(lower, q_lower);
                    tracing::trace!(
                        chain = lower.id.name(),
                        elbow_error = deform[i].transform_point3(bone.tail).distance(sol.elbow),
                        reach_error = lower_deform.transform_point3(lower.tail).distance(sol.tip),
                        "ik solved"
                    );
                }
            }
        }

        let bones = skeleton
            .bones()
            .map(|b| {
                let d = deform[b.id.index()];
                PosedBone {
                    id: b.id,
                    head: object_location + d.transform_point3(b.head),
                    tail: object_location + d.transform_point3(b.tail),
                    rotation: local[b.id.index()],
                }
            })
            .collect();
        let markers = MarkerId::ALL
            .into_iter()
            .map(|id| PosedMarker {
                id,
                location: object_location + marker_local[id.index()],
            })
            .collect();

        Ok(EvaluatedPose {
            frame,
            object_location,
            bones,
            markers,
        })
    }
}

/// Rest-relative rotation `q` applied about the bone's head, in skeleton space.
fn bone_deform(bone: &Bone, q: DQuat) -> DAffine3 {
    let rest = bone.rest_rotation();
    DAffine3::from_translation(bone.head)
        * DAffine3::from_quat(rest * q * rest.inverse())
        * DAffine3::from_translation(-bone.head)
}

fn apply_stack(stack: &[Constraint], basis: DQuat, posed: &[DQuat; BONE_COUNT]) -> DQuat {
    stack.iter().fold(basis, |q, c| match c {
        Constraint::RotationLimit { min, max } => clamp_euler_xyz(q, *min, *max),
        Constraint::CopyRotation { source, influence } => {
            q.slerp(posed[source.index()], *influence).normalize()
        }
        // Solved from the chain's upper bone.
        Constraint::Ik { .. } => q,
    })
}

fn clamp_by_limits(stack: &[Constraint], q: DQuat) -> DQuat {
    stack.iter().fold(q.normalize(), |q, c| match c {
        Constraint::RotationLimit { min, max } => clamp_euler_xyz(q, *min, *max),
        _ => q,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/pose.rs"]
mod tests;
