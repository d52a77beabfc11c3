//! Session State: the one piece of shared state between the UI and the core.
//!
//! # Invariants
//! - Hover changes arrive only as [`HoverEvent`] messages; at most one frame is hovered.
//! - Display mode changes only through a [`DisplayProbe`].
//! - The image reference mapping is fixed at construction.

mod display;
mod hover;
mod picking;
mod state;

pub use display::{Affordance, DisplayMode, DisplayProbe};
pub use hover::{HoverEvent, HoverTracker};
pub use picking::{pick_frame, ray_hits_frame};
pub use state::SessionState;

pub fn crate_info() -> &'static str {
    "gallery-session v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("session"));
    }
}
