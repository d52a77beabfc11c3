//! Rendering Adapter: renderer-agnostic interface over the gallery core.
//!
//! # Invariants
//! - Renderers read the layout, the camera view and the session; they never mutate them.
//! - A frame whose texture is not loaded shows the placeholder color, never nothing.
//!
//! Only a debug text renderer ships here. A GPU backend implements
//! [`Renderer`] against the same inputs.

mod renderer;
mod texture;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};
pub use texture::{
    FrameMaterial, GROUND_FALLBACK, PLACEHOLDER_COLOR, SurfaceMaterial, TextureCache,
    TextureStatus, frame_material, ground_material,
};

pub fn crate_info() -> &'static str {
    "gallery-render v0.1.0"
}
