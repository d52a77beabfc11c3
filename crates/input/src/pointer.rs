/// Pointer-lock mouse look.
///
/// Mouse motion only turns the camera while the cursor is captured; raw
/// pixels are scaled into look units so mouse and touch share one
/// sensitivity downstream.
#[derive(Debug, Clone)]
pub struct PointerLook {
    locked: bool,
    scale: f32,
}

impl PointerLook {
    pub fn new(scale: f32) -> Self {
        Self {
            locked: false,
            scale,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        if self.locked != locked {
            tracing::debug!(locked, "pointer lock changed");
        }
        self.locked = locked;
    }

    /// Scaled look contribution for a raw mouse delta, if captured.
    pub fn moved(&self, dx: f32, dy: f32) -> Option<(f32, f32)> {
        self.locked.then(|| (dx * self.scale, dy * self.scale))
    }
}
