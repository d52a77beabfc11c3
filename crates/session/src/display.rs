use std::fmt;

/// Which control scheme the visitor gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Keyboard plus pointer-lock mouse.
    #[default]
    Desktop,
    /// Left-half joystick plus right-half drag look.
    Mobile,
}

/// Result of probing the viewport, taken at startup and on every resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayProbe {
    pub viewport_width: f32,
    /// The primary pointer is coarse (a finger rather than a mouse).
    pub coarse_pointer: bool,
}

impl DisplayMode {
    pub fn detect(probe: DisplayProbe, mobile_width_threshold: f32) -> Self {
        if probe.coarse_pointer || probe.viewport_width < mobile_width_threshold {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Line of guidance text the HUD shows at the bottom of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    ObservingArtwork,
    Controls(DisplayMode),
}

impl fmt::Display for Affordance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObservingArtwork => f.write_str("Observing Artwork"),
            Self::Controls(DisplayMode::Mobile) => {
                f.write_str("Use Left Joystick to Move • Drag Right to Look")
            }
            Self::Controls(DisplayMode::Desktop) => {
                f.write_str("Click to Capture Mouse • WASD to Move • ESC to Exit")
            }
        }
    }
}
