use crate::{
    animation::jump::Action,
    foundation::core::FrameRange,
    foundation::error::{RigError, RigResult},
    host::MeshObject,
    rig::assemble::Rig,
    rig::measure::Measurements,
    rig::skeleton::BONE_COUNT,
};

/// Everything the build leaves behind: one mesh, one rig, one action.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JumpRigScene {
    /// Playback range set by the scene reset.
    pub frame_range: FrameRange,
    /// Extents the rig and clip were scaled by.
    pub measurements: Measurements,
    /// Bound character mesh.
    pub mesh: MeshObject,
    /// Skeleton, markers, and constraints.
    pub rig: Rig,
    /// Jump cycle tracks.
    pub action: Action,
}

impl JumpRigScene {
    /// Check cross-references between the mesh, the rig, and the action.
    pub fn validate(&self) -> RigResult<()> {
        if self.frame_range.is_empty() {
            return Err(RigError::validation("scene playback range is empty"));
        }
        self.rig.validate()?;
        self.action.validate()?;

        if let Some(armature) = &self.mesh.armature
            && *armature != self.rig.name
        {
            return Err(RigError::validation(format!(
                "mesh '{}' is bound to '{armature}', not '{}'",
                self.mesh.name, self.rig.name
            )));
        }
        if !self.mesh.vertex_groups.is_empty() && self.mesh.vertex_groups.len() != BONE_COUNT {
            return Err(RigError::validation(format!(
                "mesh '{}' has {} vertex groups, expected {BONE_COUNT}",
                self.mesh.name,
                self.mesh.vertex_groups.len()
            )));
        }
        let n_verts = self.mesh.vertices.len() as u32;
        let bad_index = self
            .mesh
            .faces
            .iter()
            .flatten()
            .chain(self.mesh.vertex_groups.iter().flat_map(|g| g.weights.iter().map(|(v, _)| v)))
            .any(|&v| v >= n_verts);
        if bad_index {
            return Err(RigError::validation(format!(
                "mesh '{}' references a missing vertex",
                self.mesh.name
            )));
        }

        for track in &self.action.tracks {
            if let Some(f) = track
                .keys
                .frames()
                .find(|&f| !self.frame_range.contains(f))
            {
                return Err(RigError::animation(format!(
                    "{:?} key at frame {} is outside the playback range",
                    track.channel, f.0
                )));
            }
        }
        Ok(())
    }

    /// Pretty JSON rendition of the scene.
    pub fn to_json_pretty(&self) -> RigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RigError::serde(format!("scene: {e}")))
    }

    /// Parse and validate a scene document.
    pub fn from_json_str(s: &str) -> RigResult<Self> {
        let scene: Self =
            serde_json::from_str(s).map_err(|e| RigError::serde(format!("scene: {e}")))?;
        scene.validate()?;
        Ok(scene)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
