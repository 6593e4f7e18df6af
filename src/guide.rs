//! # jumprig guide
//!
//! A walkthrough of how a jump rig is built and evaluated, and of the
//! conventions every stage relies on.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`RigSettings`](crate::RigSettings): every constant of the build as data; `Default` is the stock rig
//! - [`SceneHost`](crate::SceneHost): the scene the rig is built into (reset, glyph meshing, origin moves, skin binding)
//! - [`Measurements`](crate::Measurements): width, height, and footprint of the character mesh
//! - [`Skeleton`](crate::Skeleton): eight bones keyed by [`BoneId`](crate::BoneId), immutable once built
//! - [`Rig`](crate::Rig): skeleton plus markers and per-bone [`Constraint`](crate::Constraint) stacks
//! - [`Action`](crate::Action): keyframe [`Track`](crate::Track)s, one per [`Channel`](crate::Channel)
//! - [`JumpRigScene`](crate::JumpRigScene): what a build leaves behind
//!
//! ## Coordinates
//!
//! Z is up, X is lateral (left arm toward `-X`), Y is depth. The glyph
//! stands in the XZ plane and is solidified along `+Y`. After measuring,
//! the mesh origin sits at the center of its footprint, so bone heights are
//! heights above the ground.
//!
//! Bones and markers live in the skeleton's local frame. The skeleton object
//! sits at the world origin; the root-lift track moves it, and with it every
//! bone and marker.
//!
//! ## Build stages
//!
//! [`build_jump_rig`](crate::build_jump_rig) runs, in order:
//!
//! 1. `SceneHost::reset` with the playback range, then `SceneHost::text_to_mesh`
//! 2. [`measure_mesh`](crate::measure_mesh): bounding box to measurements, origin to the footprint
//! 3. [`build_skeleton`](crate::build_skeleton): `root`, three spine bones, two arms of two bones
//! 4. [`assemble_ik_rig`](crate::assemble_ik_rig): IK targets on the hands, poles pushed along depth,
//!    a rotation limit on every bone, copy rotation up the spine, IK on both forearms
//! 5. `SceneHost::bind_automatic_weights` against the finished skeleton
//! 6. [`animate_jump`](crate::animate_jump): crouch, liftoff, land
//!
//! Each stage takes the previous stage's value and returns a new one; no
//! stage reads ambient "current object" state. Failures are returned as
//! [`RigError`](crate::RigError) and abort the build.
//!
//! ## Skeleton definition
//!
//! [`SkeletonBuilder`](crate::SkeletonBuilder) is the only way to define
//! bones. `chain` places a bone's head on its parent's tail, so the
//! hierarchy invariant holds by construction. `finish` fails if any
//! [`BoneId`](crate::BoneId) is missing and returns the frozen skeleton.
//!
//! A bone's rest frame has local `+Y` along the bone and local `X` turned by
//! its roll. Arms roll `+90°` on the left and `-90°` on the right.
//!
//! ## Constraint evaluation
//!
//! [`PoseEvaluator::eval_frame`](crate::PoseEvaluator::eval_frame) poses bones
//! parents first:
//!
//! - the bone's keyed rotation (XYZ Euler) is its starting local rotation
//! - its stack runs in insertion order: rotation limits clamp Euler angles,
//!   copy rotation slerps toward the source bone's final local rotation
//! - when the upper bone of an IK chain is reached, the chain is solved
//!   analytically toward the target, bending toward the pole and twisted by
//!   the pole angle; both chain bones are then clamped by their limits
//!
//! With stretch off, an unreachable target leaves the arm fully extended
//! toward it. Limits may truncate the bend; neither case is an error.
//!
//! ## Determinism
//!
//! No stage reads a clock, a random source, or hash-map order.
//! [`fingerprint_scene`](crate::fingerprint_scene) hashes every coordinate,
//! constraint parameter, and key bit-exactly; two builds with equal
//! settings produce equal fingerprints.
//!
//! ## Settings files
//!
//! Settings are JSON. Every section defaults independently, so a file only
//! needs the fields it changes:
//!
//! ```json
//! { "skeleton": { "depth_nudge": 0.05 }, "ik": { "rotation_limit_deg": 45.0 } }
//! ```
//!
//! [`RigSettings::validate`](crate::RigSettings::validate) rejects influences
//! outside `[0, 1]`, key tables that are not strictly increasing or leave
//! the playback range, non-positive thickness, and IK chains other than two
//! bones.
