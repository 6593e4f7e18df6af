use std::path::Path;

use anyhow::Context as _;

use crate::{
    animation::ease::Ease,
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{RigError, RigResult},
};

/// Every tunable constant of the rig, grouped by pipeline stage.
///
/// `Default` reproduces the stock jump rig; JSON files only need to name the
/// fields they override.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RigSettings {
    /// Scene reset and mesh production.
    pub scene: SceneSettings,
    /// Bone placement as fractions of the measured mesh.
    pub skeleton: SkeletonProportions,
    /// IK markers and constraint parameters.
    pub ik: IkSettings,
    /// Keyframe tables of the jump cycle.
    pub clip: JumpClipSettings,
}

/// Scene-level parameters consumed before any rigging happens.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// First playback frame (inclusive).
    pub frame_first: u64,
    /// Last playback frame (inclusive).
    pub frame_last: u64,
    /// Character converted to the character mesh.
    pub glyph: char,
    /// Solidify thickness of the glyph mesh.
    pub thickness: f64,
    /// Object name of the mesh.
    pub mesh_name: String,
    /// Object name of the skeleton.
    pub rig_name: String,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            frame_first: 1,
            frame_last: 40,
            glyph: 'T',
            thickness: 0.15,
            mesh_name: "T_mesh".to_string(),
            rig_name: "T_rig".to_string(),
        }
    }
}

impl SceneSettings {
    /// Playback range as a half-open [`FrameRange`].
    pub fn frame_range(&self) -> RigResult<FrameRange> {
        FrameRange::inclusive(FrameIndex(self.frame_first), FrameIndex(self.frame_last))
    }
}

/// Fractions of measured width/height that place the bones.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SkeletonProportions {
    /// Tail height of `root`.
    pub root_top: f64,
    /// Tail heights of `spine_1..=spine_3`.
    pub spine_tops: [f64; 3],
    /// Lateral reach of the elbow and hand, as fractions of width.
    pub arm_reach: [f64; 2],
    /// Depth offset on arm tails; left is positive, right negative.
    pub depth_nudge: f64,
    /// Arm roll in degrees; left gets `+`, right `-`.
    pub arm_roll_deg: f64,
}

impl Default for SkeletonProportions {
    fn default() -> Self {
        Self {
            root_top: 0.1,
            spine_tops: [0.35, 0.65, 0.9],
            arm_reach: [0.25, 0.5],
            depth_nudge: 0.02,
            arm_roll_deg: 90.0,
        }
    }
}

/// Marker placement and constraint parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IkSettings {
    /// Depth distance of each pole marker from its IK target.
    pub pole_offset: f64,
    /// Pole angle in degrees; left gets `+`, right `-`.
    pub pole_angle_deg: f64,
    /// Bones per IK chain.
    pub chain_length: u8,
    /// Whether IK chains may stretch to reach the target.
    pub use_stretch: bool,
    /// Symmetric per-axis rotation limit in degrees.
    pub rotation_limit_deg: f64,
    /// Copy-rotation influence of `spine_2 <- spine_1` and `spine_3 <- spine_2`.
    pub spine_copy_influence: [f64; 2],
}

impl Default for IkSettings {
    fn default() -> Self {
        Self {
            pole_offset: 0.3,
            pole_angle_deg: 90.0,
            chain_length: 2,
            use_stretch: false,
            rotation_limit_deg: 30.0,
            spine_copy_influence: [0.3, 0.6],
        }
    }
}

/// One `(frame, value)` row of a keyframe table.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeySpec {
    /// Frame the key lands on.
    pub frame: u64,
    /// Height factor or angle, depending on the table.
    pub value: f64,
}

impl KeySpec {
    /// Shorthand constructor.
    pub const fn new(frame: u64, value: f64) -> Self {
        Self { frame, value }
    }
}

/// Keyframe tables of the jump cycle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct JumpClipSettings {
    /// Root translation Z, as fractions of height.
    pub root_lift: Vec<KeySpec>,
    /// `spine_1` rotation about local X, in degrees.
    pub spine_pitch_deg: Vec<KeySpec>,
    /// IK target Z, as fractions of height.
    pub arm_reach: Vec<KeySpec>,
    /// Easing applied from each key toward the next.
    pub ease: Ease,
}

impl Default for JumpClipSettings {
    fn default() -> Self {
        Self {
            root_lift: vec![
                KeySpec::new(1, 0.0),
                KeySpec::new(6, -0.12),
                KeySpec::new(12, 0.85),
                KeySpec::new(18, 0.0),
            ],
            spine_pitch_deg: vec![
                KeySpec::new(1, 0.0),
                KeySpec::new(6, -18.0),
                KeySpec::new(12, 22.0),
                KeySpec::new(18, -6.0),
                KeySpec::new(22, 0.0),
            ],
            arm_reach: vec![
                KeySpec::new(1, 0.9),
                KeySpec::new(6, 0.8),
                KeySpec::new(14, 1.05),
                KeySpec::new(20, 0.85),
            ],
            ease: Ease::InOutCubic,
        }
    }
}

impl RigSettings {
    /// Parse settings from JSON; absent fields keep their defaults.
    pub fn from_json_str(s: &str) -> RigResult<Self> {
        let settings: Self =
            serde_json::from_str(s).map_err(|e| RigError::serde(format!("rig settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a JSON settings file.
    pub fn from_path(path: impl AsRef<Path>) -> RigResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("read rig settings '{}'", path.display()))?;
        Self::from_json_str(&data)
    }

    /// Reject settings that would build an inconsistent rig.
    pub fn validate(&self) -> RigResult<()> {
        let range = self.scene.frame_range()?;
        if !(self.scene.thickness > 0.0) {
            return Err(RigError::validation("scene thickness must be > 0"));
        }
        if self.scene.mesh_name.trim().is_empty() || self.scene.rig_name.trim().is_empty() {
            return Err(RigError::validation("object names must be non-empty"));
        }
        if self.scene.mesh_name == self.scene.rig_name {
            return Err(RigError::validation(
                "mesh and rig object names must differ",
            ));
        }
        if self.ik.chain_length != 2 {
            return Err(RigError::validation(format!(
                "IK chain length must be 2, got {}",
                self.ik.chain_length
            )));
        }
        if !(self.ik.rotation_limit_deg >= 0.0) {
            return Err(RigError::validation("rotation limit must be >= 0 degrees"));
        }
        for influence in self.ik.spine_copy_influence {
            if !(0.0..=1.0).contains(&influence) {
                return Err(RigError::validation(format!(
                    "copy-rotation influence {influence} is outside [0, 1]"
                )));
            }
        }

        for (name, table) in [
            ("root_lift", &self.clip.root_lift),
            ("spine_pitch_deg", &self.clip.spine_pitch_deg),
            ("arm_reach", &self.clip.arm_reach),
        ] {
            if table.is_empty() {
                return Err(RigError::validation(format!(
                    "keyframe table '{name}' is empty"
                )));
            }
            if !table.windows(2).all(|w| w[0].frame < w[1].frame) {
                return Err(RigError::validation(format!(
                    "keyframe table '{name}' frames must be strictly increasing"
                )));
            }
            if let Some(k) = table.iter().find(|k| !range.contains(FrameIndex(k.frame))) {
                return Err(RigError::validation(format!(
                    "keyframe table '{name}' has frame {} outside the playback range",
                    k.frame
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
