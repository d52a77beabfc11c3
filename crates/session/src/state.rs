use gallery_common::FrameId;
use gallery_layout::FramePlacement;
use std::collections::BTreeMap;

use crate::display::{Affordance, DisplayMode, DisplayProbe};
use crate::hover::HoverEvent;

/// Shared session context read by the UI and the renderer.
///
/// Writers are restricted to two message kinds: [`HoverEvent`]s from picking
/// and [`DisplayProbe`]s from viewport probes. Image overrides are set once
/// at construction.
#[derive(Debug, Clone)]
pub struct SessionState {
    hovered: Option<FrameId>,
    images: BTreeMap<FrameId, String>,
    mode: DisplayMode,
    mobile_width_threshold: f32,
}

impl SessionState {
    pub fn new(mobile_width_threshold: f32) -> Self {
        Self {
            hovered: None,
            images: BTreeMap::new(),
            mode: DisplayMode::Desktop,
            mobile_width_threshold,
        }
    }

    /// Per-frame image overrides, consulted before a frame's own reference.
    pub fn with_images(mut self, images: BTreeMap<FrameId, String>) -> Self {
        self.images = images;
        self
    }

    pub fn hovered(&self) -> Option<&FrameId> {
        self.hovered.as_ref()
    }

    pub fn is_hovered(&self, id: &FrameId) -> bool {
        self.hovered.as_ref() == Some(id)
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Apply a hover message. Returns true if the hovered frame changed.
    ///
    /// A `Left` for a frame that is not the hovered one is stale and ignored.
    pub fn apply(&mut self, event: HoverEvent) -> bool {
        match event {
            HoverEvent::Entered(id) => {
                if self.hovered.as_ref() == Some(&id) {
                    return false;
                }
                tracing::debug!(frame = %id, "hover entered");
                self.hovered = Some(id);
                true
            }
            HoverEvent::Left(id) => {
                if self.hovered.as_ref() != Some(&id) {
                    tracing::trace!(frame = %id, "stale hover exit ignored");
                    return false;
                }
                tracing::debug!(frame = %id, "hover left");
                self.hovered = None;
                true
            }
        }
    }

    /// Re-run mode detection. Returns true if the mode changed.
    pub fn probe(&mut self, probe: DisplayProbe) -> bool {
        let mode = DisplayMode::detect(probe, self.mobile_width_threshold);
        if mode == self.mode {
            return false;
        }
        tracing::info!(?mode, width = probe.viewport_width, "display mode changed");
        self.mode = mode;
        true
    }

    /// Texture reference a frame should show.
    pub fn texture_ref<'a>(&'a self, frame: &'a FramePlacement) -> &'a str {
        self.images
            .get(&frame.id)
            .map(String::as_str)
            .unwrap_or(&frame.image_ref)
    }

    pub fn affordance(&self) -> Affordance {
        if self.hovered.is_some() {
            Affordance::ObservingArtwork
        } else {
            Affordance::Controls(self.mode)
        }
    }
}
