//! Gallery configuration.
//!
//! All constants the core recognizes, grouped by the component that reads
//! them. Files are YAML; every section is `#[serde(default)]` so a file only
//! needs the values it overrides.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use std::path::Path;

/// Errors from loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Camera and locomotion constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Pose the camera holds before the session starts.
    pub start_position: Vec3,
    pub start_yaw: f32,
    /// Fixed height of the camera above the ground.
    pub eye_height: f32,
    /// Units per second at full input.
    pub move_speed: f32,
    /// Radians per unit of look delta.
    pub look_sensitivity: f32,
    /// Half-width of the square walkable area centered on the origin.
    pub boundary_limit: f32,
    /// Planar input magnitude (per axis) below which no translation happens.
    pub dead_zone: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(0.0, 1.7, 28.0),
            start_yaw: 0.0,
            eye_height: 1.7,
            move_speed: 8.0,
            look_sensitivity: 0.005,
            boundary_limit: 80.0,
            dead_zone: 0.1,
        }
    }
}

/// Physical key names bound to each movement action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindingsConfig {
    pub forward: Vec<String>,
    pub backward: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub jump: Vec<String>,
}

impl Default for KeyBindingsConfig {
    fn default() -> Self {
        let keys = |names: &[&str]| names.iter().map(|k| k.to_string()).collect();
        Self {
            forward: keys(&["ArrowUp", "KeyW"]),
            backward: keys(&["ArrowDown", "KeyS"]),
            left: keys(&["ArrowLeft", "KeyA"]),
            right: keys(&["ArrowRight", "KeyD"]),
            jump: keys(&["Space"]),
        }
    }
}

/// Raw input constants: joystick geometry, pointer-lock scaling, mode probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Pixel distance from the joystick center that maps to full deflection.
    pub joystick_max_radius: f32,
    pub joystick_margin_left: f32,
    pub joystick_margin_bottom: f32,
    /// Diameter of the joystick base in pixels.
    pub joystick_base_size: f32,
    /// Mouse pixels are multiplied by this before joining the look delta.
    pub pointer_lock_scale: f32,
    /// Viewports narrower than this are treated as mobile.
    pub mobile_width_threshold: f32,
    pub key_bindings: KeyBindingsConfig,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            joystick_max_radius: 50.0,
            joystick_margin_left: 48.0,
            joystick_margin_bottom: 80.0,
            joystick_base_size: 128.0,
            pointer_lock_scale: 0.4,
            mobile_width_threshold: 1024.0,
            key_bindings: KeyBindingsConfig::default(),
        }
    }
}

/// Pavilion geometry: the frame arc and the pillar ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PavilionConfig {
    pub radius: f32,
    /// Frames hang this far inside the pillar ring.
    pub frame_inset: f32,
    pub frame_height: f32,
    pub frame_scale: f32,
    pub arc_start: f32,
    pub arc_end: f32,
    pub pillar_count: usize,
    /// Angular half-width of the entrance left open around angle 0.
    pub entrance_gap: f32,
}

impl Default for PavilionConfig {
    fn default() -> Self {
        Self {
            radius: 16.0,
            frame_inset: 1.5,
            frame_height: 5.0,
            frame_scale: 2.0,
            arc_start: 0.5,
            arc_end: TAU - 0.5,
            pillar_count: 16,
            entrance_gap: 0.6,
        }
    }
}

/// Forest scatter constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    pub count: usize,
    pub clearing_radius: f32,
    pub forest_radius: f32,
    pub base_scale: f32,
    pub scale_range: f32,
    pub palette: Vec<String>,
    /// Fixed seed for a reproducible forest. Unset draws a fresh forest per run.
    pub seed: Option<u64>,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            count: 250,
            clearing_radius: 50.0,
            forest_radius: 150.0,
            base_scale: 3.0,
            scale_range: 3.0,
            palette: ["#2d4a57", "#4a3b52", "#1f3a3d", "#3d3240"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            seed: None,
        }
    }
}

/// Frames on the arc and the images they show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramesConfig {
    pub count: usize,
    /// Image reference per arc slot, in slot order.
    pub images: Vec<String>,
    /// Shown by frames past the end of `images`.
    pub fallback_image: String,
}

impl Default for FramesConfig {
    fn default() -> Self {
        let images = [
            "t5BVRHB", "csU5D87", "UHhgZoE", "rMJlfqn", "jM030m5", "AvUwqDr", "Os1bX0h",
            "wO2nGLm", "Tuzi4qn", "hQl0XyO",
        ]
        .iter()
        .map(|id| format!("https://i.imgur.com/{id}.jpeg?v=2"))
        .collect();
        Self {
            count: 10,
            images,
            fallback_image: "https://picsum.photos/500/500?grayscale".into(),
        }
    }
}

/// Complete gallery configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub camera: CameraConfig,
    pub input: InputConfig,
    pub pavilion: PavilionConfig,
    pub forest: ForestConfig,
    pub frames: FramesConfig,
}

impl GalleryConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded gallery config");
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check camera and input constants.
    ///
    /// Layout values are checked by the layout engine when the scene is built,
    /// so degenerate geometry is reported in layout terms.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cam = &self.camera;
        if !cam.start_position.is_finite() || !cam.start_yaw.is_finite() {
            return Err(invalid("camera.start_position", "must be finite"));
        }
        positive("camera.eye_height", cam.eye_height)?;
        non_negative("camera.move_speed", cam.move_speed)?;
        non_negative("camera.look_sensitivity", cam.look_sensitivity)?;
        positive("camera.boundary_limit", cam.boundary_limit)?;
        non_negative("camera.dead_zone", cam.dead_zone)?;

        let input = &self.input;
        positive("input.joystick_max_radius", input.joystick_max_radius)?;
        non_negative("input.joystick_margin_left", input.joystick_margin_left)?;
        non_negative("input.joystick_margin_bottom", input.joystick_margin_bottom)?;
        positive("input.joystick_base_size", input.joystick_base_size)?;
        non_negative("input.pointer_lock_scale", input.pointer_lock_scale)?;
        non_negative("input.mobile_width_threshold", input.mobile_width_threshold)?;
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("expected a positive number, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("expected a non-negative number, got {value}")))
    }
}
