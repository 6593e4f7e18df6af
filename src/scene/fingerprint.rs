use crate::{
    animation::{anim::InterpMode, ease::Ease, jump::Channel},
    foundation::core::{DQuat, DVec3},
    foundation::math::Fnv1a64,
    rig::constraint::Constraint,
    scene::model::JumpRigScene,
};

/// 128-bit content hash of a built scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SceneFingerprint {
    /// First lane.
    pub hi: u64,
    /// Second lane.
    pub lo: u64,
}

impl std::fmt::Display for SceneFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Hash every coordinate, constraint parameter, and key bit-exactly.
///
/// Two builds from the same settings must produce the same fingerprint.
pub fn fingerprint_scene(scene: &JumpRigScene) -> SceneFingerprint {
    let mut a = Fnv1a64::new_default();
    let mut b = Fnv1a64::new(0x9ae1_6a3b_2f90_404f);

    write_u64_pair(&mut a, &mut b, scene.frame_range.start.0);
    write_u64_pair(&mut a, &mut b, scene.frame_range.end.0);
    write_f64_pair(&mut a, &mut b, scene.measurements.width);
    write_f64_pair(&mut a, &mut b, scene.measurements.height);
    write_vec_pair(&mut a, &mut b, scene.measurements.footprint_center);

    let mesh = &scene.mesh;
    write_str_pair(&mut a, &mut b, &mesh.name);
    write_vec_pair(&mut a, &mut b, mesh.location);
    write_quat_pair(&mut a, &mut b, mesh.rotation);
    write_u64_pair(&mut a, &mut b, mesh.vertices.len() as u64);
    for v in &mesh.vertices {
        write_vec_pair(&mut a, &mut b, *v);
    }
    write_u64_pair(&mut a, &mut b, mesh.faces.len() as u64);
    for face in &mesh.faces {
        write_u64_pair(&mut a, &mut b, face.len() as u64);
        for &i in face {
            write_u64_pair(&mut a, &mut b, u64::from(i));
        }
    }
    write_u64_pair(&mut a, &mut b, mesh.vertex_groups.len() as u64);
    for g in &mesh.vertex_groups {
        write_str_pair(&mut a, &mut b, g.bone.name());
        write_u64_pair(&mut a, &mut b, g.weights.len() as u64);
        for &(v, w) in &g.weights {
            write_u64_pair(&mut a, &mut b, u64::from(v));
            write_f64_pair(&mut a, &mut b, w);
        }
    }
    write_str_pair(&mut a, &mut b, mesh.armature.as_deref().unwrap_or(""));

    let rig = &scene.rig;
    write_str_pair(&mut a, &mut b, &rig.name);
    write_vec_pair(&mut a, &mut b, rig.location);
    for bone in rig.skeleton.bones() {
        write_str_pair(&mut a, &mut b, bone.id.name());
        write_vec_pair(&mut a, &mut b, bone.head);
        write_vec_pair(&mut a, &mut b, bone.tail);
        write_f64_pair(&mut a, &mut b, bone.roll);
    }
    for m in &rig.markers {
        write_str_pair(&mut a, &mut b, m.id.name());
        write_vec_pair(&mut a, &mut b, m.location);
    }
    for stack in &rig.stacks {
        write_str_pair(&mut a, &mut b, stack.owner.name());
        write_u64_pair(&mut a, &mut b, stack.constraints.len() as u64);
        for c in &stack.constraints {
            write_str_pair(&mut a, &mut b, c.kind());
            match c {
                Constraint::RotationLimit { min, max } => {
                    write_vec_pair(&mut a, &mut b, *min);
                    write_vec_pair(&mut a, &mut b, *max);
                }
                Constraint::CopyRotation { source, influence } => {
                    write_str_pair(&mut a, &mut b, source.name());
                    write_f64_pair(&mut a, &mut b, *influence);
                }
                Constraint::Ik {
                    target,
                    pole,
                    pole_angle,
                    chain_length,
                    use_stretch,
                } => {
                    write_str_pair(&mut a, &mut b, target.name());
                    write_str_pair(&mut a, &mut b, pole.name());
                    write_f64_pair(&mut a, &mut b, *pole_angle);
                    write_u8_pair(&mut a, &mut b, *chain_length);
                    write_u8_pair(&mut a, &mut b, u8::from(*use_stretch));
                }
            }
        }
    }

    let action = &scene.action;
    write_str_pair(&mut a, &mut b, &action.name);
    write_u64_pair(&mut a, &mut b, action.tracks.len() as u64);
    for track in &action.tracks {
        match track.channel {
            Channel::ObjectLocation => write_u8_pair(&mut a, &mut b, 0),
            Channel::BoneRotation(bone) => {
                write_u8_pair(&mut a, &mut b, 1);
                write_str_pair(&mut a, &mut b, bone.name());
            }
            Channel::MarkerLocation(marker) => {
                write_u8_pair(&mut a, &mut b, 2);
                write_str_pair(&mut a, &mut b, marker.name());
            }
        }
        write_u8_pair(
            &mut a,
            &mut b,
            match track.keys.mode {
                InterpMode::Hold => 0,
                InterpMode::Linear => 1,
            },
        );
        write_u64_pair(&mut a, &mut b, track.keys.keys.len() as u64);
        for k in &track.keys.keys {
            write_u64_pair(&mut a, &mut b, k.frame.0);
            write_vec_pair(&mut a, &mut b, k.value);
            write_u8_pair(&mut a, &mut b, ease_tag(k.ease));
        }
    }

    SceneFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn ease_tag(ease: Ease) -> u8 {
    match ease {
        Ease::Linear => 0,
        Ease::InOutCubic => 1,
    }
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_f64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: f64) {
    write_u64_pair(a, b, v.to_bits());
}

fn write_vec_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: DVec3) {
    for c in v.to_array() {
        write_f64_pair(a, b, c);
    }
}

fn write_quat_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, q: DQuat) {
    for c in q.to_array() {
        write_f64_pair(a, b, c);
    }
}

fn write_str_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, s: &str) {
    write_u64_pair(a, b, s.len() as u64);
    a.write_bytes(s.as_bytes());
    b.write_bytes(s.as_bytes());
}

#[cfg(test)]
#[path = "../../tests/unit/scene/fingerprint.rs"]
mod tests;
