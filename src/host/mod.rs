//! Seam to the scene host: the collaborators the rig pipeline consumes but
//! does not own (scene reset, glyph meshing, origin moves, skin binding).

pub(crate) mod glyph;
pub(crate) mod memory;
pub(crate) mod weights;

use crate::{
    foundation::core::{Aabb3, DAffine3, DQuat, DVec3, FrameRange},
    foundation::error::RigResult,
    rig::skeleton::{BoneId, Skeleton},
};

/// Opaque reference to a mesh owned by a [`SceneHost`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct MeshHandle(pub u32);

/// Renderable surface with a world transform and local-space geometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MeshObject {
    /// Object name.
    pub name: String,
    /// World location of the local origin.
    pub location: DVec3,
    /// World rotation of the local frame.
    pub rotation: DQuat,
    /// Vertex positions in local space.
    pub vertices: Vec<DVec3>,
    /// Polygon faces as vertex index loops.
    pub faces: Vec<Vec<u32>>,
    /// Skin weights written by automatic binding, one group per bone.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertex_groups: Vec<VertexGroup>,
    /// Name of the skeleton object deforming this mesh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armature: Option<String>,
}

impl MeshObject {
    /// Local-space bounding box; `None` for a mesh without vertices.
    pub fn local_bounds(&self) -> Option<Aabb3> {
        Aabb3::from_points(&self.vertices)
    }

    /// Local->world transform.
    pub fn world_transform(&self) -> DAffine3 {
        DAffine3::from_rotation_translation(self.rotation, self.location)
    }

    /// Vertex positions in world space.
    pub fn world_vertices(&self) -> Vec<DVec3> {
        let xf = self.world_transform();
        self.vertices.iter().map(|v| xf.transform_point3(*v)).collect()
    }
}

/// Per-bone skin weights.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VertexGroup {
    /// Deforming bone.
    pub bone: BoneId,
    /// `(vertex index, weight)` pairs, sorted by vertex index.
    pub weights: Vec<(u32, f64)>,
}

/// Scene host operations consumed by the rig pipeline.
///
/// Implementations own all scene state; the pipeline only holds handles.
pub trait SceneHost {
    /// Drop every object and set the playback range.
    fn reset(&mut self, frame_range: FrameRange) -> RigResult<()>;

    /// Current playback range, `None` before the first reset.
    fn frame_range(&self) -> Option<FrameRange>;

    /// Convert `glyph` into a solid mesh of the given thickness.
    fn text_to_mesh(&mut self, name: &str, glyph: char, thickness: f64) -> RigResult<MeshHandle>;

    /// Read access to a mesh.
    fn mesh(&self, mesh: MeshHandle) -> RigResult<&MeshObject>;

    /// Move the local origin to `world_point` without moving visible geometry.
    fn relocate_origin(&mut self, mesh: MeshHandle, world_point: DVec3) -> RigResult<()>;

    /// Compute skin weights of `mesh` against a finished skeleton.
    fn bind_automatic_weights(
        &mut self,
        mesh: MeshHandle,
        rig_name: &str,
        skeleton: &Skeleton,
        rig_location: DVec3,
    ) -> RigResult<()>;
}

pub use memory::MemoryHost;
