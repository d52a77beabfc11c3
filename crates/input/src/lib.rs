//! Input Aggregation: raw keyboard, pointer-lock mouse and touch events
//! normalized into a single per-frame motion and look intent.
//!
//! # Invariants
//! - Look deltas are one-shot: reading them drains the accumulator.
//! - Joystick output never exceeds unit length; releasing it yields exactly zero.
//! - Nothing here touches the camera or the scene.

pub mod action;
mod aggregator;
mod intent;
mod joystick;
mod keyboard;
mod pointer;
mod touch;

#[cfg(feature = "winit")]
pub mod platform;

pub use action::{KeyAction, KeyBindings};
pub use aggregator::{FrameInput, InputAggregator};
pub use intent::{LookDelta, MotionIntent, PlanarInput};
pub use joystick::Joystick;
pub use keyboard::KeyboardState;
pub use pointer::PointerLook;
pub use touch::{TouchEvent, TouchId, TouchLook, TouchPhase, TouchZone};

pub fn crate_info() -> &'static str {
    "gallery-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
