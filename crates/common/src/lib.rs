//! Shared types and configuration for the gallery core.
//!
//! # Invariants
//! - Configuration is fixed at construction; nothing here is mutated at runtime.
//! - Every configuration section has a default reproducing the shipped gallery.

pub mod config;
mod types;

pub use config::{
    CameraConfig, ConfigError, ForestConfig, FramesConfig, GalleryConfig, InputConfig,
    KeyBindingsConfig, PavilionConfig,
};
pub use types::FrameId;

pub fn crate_info() -> &'static str {
    "gallery-common v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("common"));
    }
}
