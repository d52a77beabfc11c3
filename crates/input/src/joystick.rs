use gallery_common::InputConfig;
use glam::Vec2;

use crate::touch::TouchId;

/// Virtual joystick with a fixed circular base.
///
/// The knob follows the owning touch, clamped to `max_radius` from the base
/// center. Output is the clamped offset divided by `max_radius`.
#[derive(Debug, Clone)]
pub struct Joystick {
    center: Vec2,
    max_radius: f32,
    owner: Option<TouchId>,
    knob: Vec2,
}

impl Joystick {
    pub fn new(center: Vec2, max_radius: f32) -> Self {
        Self {
            center,
            max_radius,
            owner: None,
            knob: Vec2::ZERO,
        }
    }

    /// Joystick anchored bottom-left of a viewport of the given size.
    pub fn for_viewport(config: &InputConfig, viewport: Vec2) -> Self {
        Self::new(base_center(config, viewport), config.joystick_max_radius)
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Move the base, e.g. after a resize. A held knob keeps its offset until
    /// the next drag event.
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    pub fn owner(&self) -> Option<TouchId> {
        self.owner
    }

    pub fn is_active(&self) -> bool {
        self.owner.is_some()
    }

    /// Claim the joystick for `id` and place the knob. Ignored while owned.
    pub fn press(&mut self, id: TouchId, point: Vec2) -> bool {
        if self.owner.is_some() {
            return false;
        }
        self.owner = Some(id);
        self.track(point);
        tracing::trace!(?id, "joystick claimed");
        true
    }

    /// Follow the owning touch.
    pub fn drag(&mut self, id: TouchId, point: Vec2) -> bool {
        if self.owner != Some(id) {
            return false;
        }
        self.track(point);
        true
    }

    /// Release the knob back to the exact center.
    pub fn release(&mut self, id: TouchId) -> bool {
        if self.owner != Some(id) {
            return false;
        }
        self.owner = None;
        self.knob = Vec2::ZERO;
        tracing::trace!(?id, "joystick released");
        true
    }

    /// Clamped knob offset from the base center in pixels, for drawing.
    pub fn knob_offset(&self) -> Vec2 {
        self.knob
    }

    /// Normalized deflection; length never exceeds one.
    pub fn vector(&self) -> Vec2 {
        self.knob / self.max_radius
    }

    fn track(&mut self, point: Vec2) {
        if !point.is_finite() {
            return;
        }
        self.knob = (point - self.center).clamp_length_max(self.max_radius);
    }
}

/// Base center for a viewport: offset from the bottom-left corner by the
/// configured margins plus half the base size.
pub fn base_center(config: &InputConfig, viewport: Vec2) -> Vec2 {
    let half = config.joystick_base_size * 0.5;
    Vec2::new(
        config.joystick_margin_left + half,
        viewport.y - config.joystick_margin_bottom - half,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stick() -> Joystick {
        Joystick::new(Vec2::new(100.0, 500.0), 50.0)
    }

    #[test]
    fn small_offsets_scale_linearly() {
        let mut js = stick();
        js.press(TouchId(0), Vec2::new(125.0, 500.0));
        assert_eq!(js.vector(), Vec2::new(0.5, 0.0));
    }

    #[test]
    fn large_offsets_clamp_to_unit_length() {
        let mut js = stick();
        js.press(TouchId(0), Vec2::new(100.0, 500.0));
        for point in [
            Vec2::new(400.0, 500.0),
            Vec2::new(-300.0, 900.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(137.0, 463.0),
        ] {
            js.drag(TouchId(0), point);
            assert!(js.vector().length() <= 1.0 + 1e-6);
            assert!(js.knob_offset().length() <= 50.0 + 1e-4);
        }
    }

    #[test]
    fn clamped_direction_is_preserved() {
        let mut js = stick();
        js.press(TouchId(0), Vec2::new(100.0, 700.0));
        let v = js.vector();
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn release_resets_to_exact_zero() {
        let mut js = stick();
        js.press(TouchId(4), Vec2::new(140.0, 470.0));
        assert!(js.release(TouchId(4)));
        assert_eq!(js.vector(), Vec2::ZERO);
        assert_eq!(js.knob_offset(), Vec2::ZERO);
        assert!(!js.is_active());
    }

    #[test]
    fn other_touches_are_ignored_while_owned() {
        let mut js = stick();
        js.press(TouchId(1), Vec2::new(110.0, 500.0));
        assert!(!js.press(TouchId(2), Vec2::new(150.0, 500.0)));
        assert!(!js.drag(TouchId(2), Vec2::new(150.0, 500.0)));
        assert!(!js.release(TouchId(2)));
        assert_eq!(js.vector(), Vec2::new(0.2, 0.0));
    }

    #[test]
    fn base_center_tracks_viewport_height() {
        let config = InputConfig::default();
        let center = base_center(&config, Vec2::new(390.0, 844.0));
        assert_eq!(center, Vec2::new(48.0 + 64.0, 844.0 - 80.0 - 64.0));
    }
}
