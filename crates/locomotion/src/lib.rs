//! Locomotion: integrates per-frame motion and look intent into the camera pose.
//!
//! # Invariants
//! - Pitch stays within `[-π/2, π/2]`.
//! - `position.y` equals the eye height at all times.
//! - `position.x` and `position.z` stay within `[-limit, limit]`.
//! - Look is applied before translation within a frame.

mod controller;
mod pose;

pub use controller::{LocomotionController, SessionPhase};
pub use pose::CameraPose;

pub fn crate_info() -> &'static str {
    "gallery-locomotion v0.1.0"
}
