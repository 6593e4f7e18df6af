use crate::{
    animation::anim::{InterpMode, Keyframes},
    config::settings::{JumpClipSettings, KeySpec},
    foundation::core::{DVec3, FrameIndex},
    foundation::error::{RigError, RigResult},
    rig::assemble::Rig,
    rig::constraint::MarkerId,
    rig::measure::Measurements,
    rig::skeleton::{BoneId, Side},
};

/// Property a track drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum Channel {
    /// World location of the skeleton object.
    ObjectLocation,
    /// Local XYZ Euler rotation (radians) of one bone.
    BoneRotation(BoneId),
    /// Location of a marker in the skeleton's frame.
    MarkerLocation(MarkerId),
}

/// One animated channel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Track {
    /// Driven property.
    pub channel: Channel,
    /// Keyed vector values.
    pub keys: Keyframes<DVec3>,
}

/// Named set of tracks attached to the rig.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Action {
    /// Action name.
    pub name: String,
    /// Tracks in creation order; at most one per channel.
    pub tracks: Vec<Track>,
}

impl Action {
    /// Track driving `channel`, if any.
    pub fn track(&self, channel: Channel) -> Option<&Track> {
        self.tracks.iter().find(|t| t.channel == channel)
    }

    /// Every track must be keyed, ordered, and drive a distinct channel.
    pub fn validate(&self) -> RigResult<()> {
        for (i, t) in self.tracks.iter().enumerate() {
            t.keys.validate()?;
            if self.tracks[..i].iter().any(|o| o.channel == t.channel) {
                return Err(RigError::animation(format!(
                    "action '{}' drives {:?} twice",
                    self.name, t.channel
                )));
            }
        }
        Ok(())
    }
}

fn keyed(
    table: &[KeySpec],
    clip: &JumpClipSettings,
    value: impl Fn(f64) -> DVec3,
) -> RigResult<Keyframes<DVec3>> {
    let mut keys = Keyframes::new(InterpMode::Linear);
    for k in table {
        keys.insert(FrameIndex(k.frame), value(k.value), clip.ease)?;
    }
    Ok(keys)
}

/// Key the jump cycle: root lift, spine pitch, and both IK targets.
///
/// Heights scale with `m.height`; targets keep their rest X/Y and only
/// move vertically in the skeleton's frame.
#[tracing::instrument(skip(rig, clip))]
pub fn animate_jump(m: &Measurements, rig: &Rig, clip: &JumpClipSettings) -> RigResult<Action> {
    let h = m.height;
    let base = rig.location;
    let mut tracks = vec![
        Track {
            channel: Channel::ObjectLocation,
            keys: keyed(&clip.root_lift, clip, |f| base + DVec3::new(0.0, 0.0, f * h))?,
        },
        Track {
            channel: Channel::BoneRotation(BoneId::Spine1),
            keys: keyed(&clip.spine_pitch_deg, clip, |deg| {
                DVec3::new(deg.to_radians(), 0.0, 0.0)
            })?,
        },
    ];
    for side in Side::BOTH {
        let id = MarkerId::target(side);
        let anchor = rig.marker(id).location;
        tracks.push(Track {
            channel: Channel::MarkerLocation(id),
            keys: keyed(&clip.arm_reach, clip, |f| {
                DVec3::new(anchor.x, anchor.y, f * h)
            })?,
        });
    }

    let action = Action {
        name: format!("{}_jump", rig.name),
        tracks,
    };
    action.validate()?;
    tracing::debug!(
        tracks = action.tracks.len(),
        keys = action.tracks.iter().map(|t| t.keys.keys.len()).sum::<usize>(),
        "jump keyed"
    );
    Ok(action)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/jump.rs"]
mod tests;
