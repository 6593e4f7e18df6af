//! jumprig builds a small articulated character procedurally: a `T` glyph is
//! meshed, measured, rigged with an eight-bone skeleton, given IK-driven arms,
//! and keyed with a jump cycle.
//!
//! # Pipeline overview
//!
//! 1. **Mesh**: the [`SceneHost`] resets the scene and turns the glyph into a solid mesh
//! 2. **Measure**: `mesh -> Measurements` (width, height, footprint), origin moved to the footprint
//! 3. **Skeleton**: `Measurements -> Skeleton` (fixed fractions of width/height)
//! 4. **Rig**: `Skeleton -> Rig` (IK markers, rotation limits, copy rotation, two-bone IK)
//! 5. **Animate**: `Rig -> Action` (root lift, spine pitch, arm reach)
//!
//! [`build_jump_rig`] runs all five stages and returns the [`JumpRigScene`];
//! [`PoseEvaluator`] resolves that scene at any frame.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: a build is a pure function of [`RigSettings`]; see [`fingerprint_scene`].
//! - **Typed topology**: bones and markers are closed enums, never looked up by string.
//!
//! For a longer walkthrough, see [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod eval;
mod foundation;
mod host;
mod pipeline;
mod rig;
mod scene;

/// Standalone walkthrough of the rig pipeline and its conventions.
pub mod guide;

pub use animation::anim::{InterpMode, Keyframe, Keyframes, Lerp};
pub use animation::ease::Ease;
pub use animation::jump::{Action, Channel, Track, animate_jump};
pub use config::settings::{
    IkSettings, JumpClipSettings, KeySpec, RigSettings, SceneSettings, SkeletonProportions,
};
pub use eval::pose::{EvaluatedPose, PoseEvaluator, PosedBone, PosedMarker};
pub use foundation::core::{Aabb3, DAffine3, DQuat, DVec3, FrameIndex, FrameRange};
pub use foundation::error::{RigError, RigResult};
pub use host::{MemoryHost, MeshHandle, MeshObject, SceneHost, VertexGroup};
pub use pipeline::build::build_jump_rig;
pub use rig::assemble::{Rig, assemble_ik_rig, ik_anchor};
pub use rig::constraint::{Constraint, ConstraintStack, Marker, MarkerId};
pub use rig::measure::{Measurements, measure_mesh};
pub use rig::skeleton::{BONE_COUNT, Bone, BoneId, Side, Skeleton, SkeletonBuilder, build_skeleton};
pub use scene::fingerprint::{SceneFingerprint, fingerprint_scene};
pub use scene::model::JumpRigScene;
