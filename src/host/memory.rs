use crate::{
    foundation::core::{DQuat, DVec3, FrameRange},
    foundation::error::{RigError, RigResult},
    host::{MeshHandle, MeshObject, SceneHost, glyph, weights},
    rig::skeleton::Skeleton,
};

/// Deterministic in-memory scene host.
///
/// Holds meshes in creation order; handles index into that list and are
/// invalidated by [`SceneHost::reset`].
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    frame_range: Option<FrameRange>,
    meshes: Vec<MeshObject>,
}

impl MemoryHost {
    /// Host with an empty, un-reset scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live mesh objects.
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    fn mesh_mut(&mut self, mesh: MeshHandle) -> RigResult<&mut MeshObject> {
        self.meshes
            .get_mut(mesh.0 as usize)
            .ok_or_else(|| RigError::validation(format!("unknown mesh handle {}", mesh.0)))
    }
}

impl SceneHost for MemoryHost {
    fn reset(&mut self, frame_range: FrameRange) -> RigResult<()> {
        if frame_range.is_empty() {
            return Err(RigError::validation("playback range must not be empty"));
        }
        self.meshes.clear();
        self.frame_range = Some(frame_range);
        Ok(())
    }

    fn frame_range(&self) -> Option<FrameRange> {
        self.frame_range
    }

    fn text_to_mesh(&mut self, name: &str, glyph: char, thickness: f64) -> RigResult<MeshHandle> {
        if self.frame_range.is_none() {
            return Err(RigError::validation("scene must be reset before adding objects"));
        }
        if self.meshes.iter().any(|m| m.name == name) {
            return Err(RigError::validation(format!(
                "object name '{name}' already in use"
            )));
        }
        let outline = glyph::glyph_outline(glyph)?;
        let ring = glyph::flatten_ring(&outline)?;
        let (vertices, faces) = glyph::extrude_ring(&ring, thickness);

        let handle = MeshHandle(self.meshes.len() as u32);
        self.meshes.push(MeshObject {
            name: name.to_string(),
            location: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            vertices,
            faces,
            vertex_groups: Vec::new(),
            armature: None,
        });
        tracing::debug!(name, %glyph, thickness, "glyph meshed");
        Ok(handle)
    }

    fn mesh(&self, mesh: MeshHandle) -> RigResult<&MeshObject> {
        self.meshes
            .get(mesh.0 as usize)
            .ok_or_else(|| RigError::validation(format!("unknown mesh handle {}", mesh.0)))
    }

    fn relocate_origin(&mut self, mesh: MeshHandle, world_point: DVec3) -> RigResult<()> {
        let m = self.mesh_mut(mesh)?;
        let to_local = m.world_transform().inverse();
        let shift = to_local.transform_point3(world_point);
        for v in &mut m.vertices {
            *v -= shift;
        }
        m.location = world_point;
        Ok(())
    }

    fn bind_automatic_weights(
        &mut self,
        mesh: MeshHandle,
        rig_name: &str,
        skeleton: &Skeleton,
        rig_location: DVec3,
    ) -> RigResult<()> {
        let m = self.mesh_mut(mesh)?;
        let world = m.world_vertices();
        m.vertex_groups = weights::automatic_weights(&world, skeleton, rig_location);
        m.armature = Some(rig_name.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/memory.rs"]
mod tests;
