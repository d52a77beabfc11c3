//! Scene Layout: static placement lists computed once at scene construction.
//!
//! The layout is plain data (positions, orientations, scales, references);
//! turning it into geometry is the renderer's business.
//!
//! # Invariants
//! - Frame placements are evenly spaced in angle and deterministic.
//! - Forest props lie between the clearing and forest radii.
//! - Degenerate inputs fail with a [`LayoutError`], never NaN positions.

mod arc;
mod error;
mod forest;
mod frames;
mod pillars;
mod scene;

pub use arc::{ArcSlot, ArcSpec, arc_slots};
pub use error::LayoutError;
pub use forest::{ForestProp, ForestSpec, scatter_forest};
pub use frames::{FRAME_OUTER_SIZE, FramePlacement, place_frames};
pub use pillars::{PillarPlacement, PillarRingSpec, pillar_ring};
pub use scene::SceneLayout;

pub fn crate_info() -> &'static str {
    "gallery-layout v0.1.0"
}
