use crate::{
    foundation::core::{Aabb3, DVec3},
    foundation::error::{RigError, RigResult},
    host::{MeshHandle, SceneHost},
};

/// Extents of the character mesh that every later stage scales by.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Measurements {
    /// Lateral (X) extent of the local bounding box.
    pub width: f64,
    /// Vertical (Z) extent of the local bounding box.
    pub height: f64,
    /// World-space center of the bottom face of the bounding box.
    pub footprint_center: DVec3,
}

impl Measurements {
    /// Measurements for a mesh standing on the world origin.
    pub fn from_dimensions(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            footprint_center: DVec3::ZERO,
        }
    }

    /// Derive extents from the corners of a local bounding box and the mesh's
    /// local->world map.
    pub fn from_bounds(bounds: &Aabb3, to_world: impl Fn(DVec3) -> DVec3) -> Self {
        let corners = bounds.corners();
        // [0] and [3] are opposite corners of the bottom face, [4] sits above [0].
        let (low, far, top) = (corners[0], corners[3], corners[4]);
        Self {
            width: far.x - low.x,
            height: top.z - low.z,
            footprint_center: to_world((low + far) * 0.5),
        }
    }
}

/// Measure `mesh` and move its origin to the footprint center.
///
/// A flat or empty-volume box is accepted and yields zero extents; only a
/// mesh without any vertices is rejected.
#[tracing::instrument(skip(host))]
pub fn measure_mesh(host: &mut dyn SceneHost, mesh: MeshHandle) -> RigResult<Measurements> {
    let object = host.mesh(mesh)?;
    let bounds = object.local_bounds().ok_or_else(|| {
        RigError::geometry(format!("mesh '{}' has no vertices to measure", object.name))
    })?;
    let to_world = object.world_transform();
    let m = Measurements::from_bounds(&bounds, |p| to_world.transform_point3(p));

    host.relocate_origin(mesh, m.footprint_center)?;
    tracing::debug!(
        width = m.width,
        height = m.height,
        footprint = ?m.footprint_center,
        "mesh measured"
    );
    Ok(m)
}

#[cfg(test)]
#[path = "../../tests/unit/rig/measure.rs"]
mod tests;
