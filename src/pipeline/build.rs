use crate::{
    animation::jump::animate_jump,
    config::settings::RigSettings,
    foundation::error::RigResult,
    host::SceneHost,
    rig::{assemble::assemble_ik_rig, measure::measure_mesh, skeleton::build_skeleton},
    scene::model::JumpRigScene,
};

/// Run the whole build against `host`, starting from a reset scene.
///
/// Stages run in a fixed order and each consumes only what the previous
/// ones returned: mesh, measurements, skeleton, rig, action. Any failure
/// aborts the build; re-running starts from an empty scene again.
#[tracing::instrument(skip(host, settings))]
pub fn build_jump_rig(host: &mut dyn SceneHost, settings: &RigSettings) -> RigResult<JumpRigScene> {
    settings.validate()?;
    let scene = &settings.scene;
    let frame_range = scene.frame_range()?;

    host.reset(frame_range)?;
    let mesh = host.text_to_mesh(&scene.mesh_name, scene.glyph, scene.thickness)?;
    let measurements = measure_mesh(host, mesh)?;

    let skeleton = build_skeleton(&measurements, &settings.skeleton)?;
    // Weights need the finished bone tree; the rig object sits at the origin.
    let rig = assemble_ik_rig(&scene.rig_name, skeleton, &settings.ik)?;
    host.bind_automatic_weights(mesh, &rig.name, &rig.skeleton, rig.location)?;

    let action = animate_jump(&measurements, &rig, &settings.clip)?;

    let out = JumpRigScene {
        frame_range,
        measurements,
        mesh: host.mesh(mesh)?.clone(),
        rig,
        action,
    };
    out.validate()?;
    tracing::info!(
        width = measurements.width,
        height = measurements.height,
        bones = out.rig.skeleton.bones().count(),
        constraints = out.rig.constraint_count(),
        tracks = out.action.tracks.len(),
        "jump rig built"
    );
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/build.rs"]
mod tests;
