use glam::Vec2;

/// Platform identifier of a single finger, stable from start to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TouchId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    /// The platform took the touch away; handled like `Ended`.
    Cancelled,
}

/// A raw touch event in viewport pixels (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub id: TouchId,
    pub phase: TouchPhase,
    pub position: Vec2,
}

/// Screen zone a touch starts in. The zone only decides which channel
/// claims the touch; later movement is tracked wherever the finger goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchZone {
    /// Left half of the viewport.
    Joystick,
    /// Right half of the viewport.
    Look,
}

impl TouchZone {
    pub fn classify(point: Vec2, viewport: Vec2) -> Self {
        if point.x < viewport.x * 0.5 {
            Self::Joystick
        } else {
            Self::Look
        }
    }
}

/// Drag-to-look tracker.
///
/// Emits the movement since the previous event for the touch that owns it
/// and never a cumulative position.
#[derive(Debug, Clone, Default)]
pub struct TouchLook {
    owner: Option<TouchId>,
    last: Option<Vec2>,
}

impl TouchLook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(&self) -> Option<TouchId> {
        self.owner
    }

    pub fn is_active(&self) -> bool {
        self.owner.is_some()
    }

    /// Claim the channel for `id`. Ignored while another touch owns it.
    pub fn begin(&mut self, id: TouchId, point: Vec2) -> bool {
        if self.owner.is_some() || !point.is_finite() {
            return false;
        }
        self.owner = Some(id);
        self.last = Some(point);
        true
    }

    /// Movement since the last event for the owning touch.
    pub fn moved(&mut self, id: TouchId, point: Vec2) -> Option<Vec2> {
        if self.owner != Some(id) || !point.is_finite() {
            return None;
        }
        let last = self.last.replace(point)?;
        Some(point - last)
    }

    /// Release the channel. The next touch starts from a fresh point.
    pub fn end(&mut self, id: TouchId) -> bool {
        if self.owner != Some(id) {
            return false;
        }
        self.owner = None;
        self.last = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn zones_split_viewport_in_half() {
        assert_eq!(
            TouchZone::classify(Vec2::new(100.0, 300.0), VIEWPORT),
            TouchZone::Joystick
        );
        assert_eq!(
            TouchZone::classify(Vec2::new(400.0, 300.0), VIEWPORT),
            TouchZone::Look
        );
    }

    #[test]
    fn emits_per_move_deltas() {
        let mut look = TouchLook::new();
        let id = TouchId(1);
        assert!(look.begin(id, Vec2::new(500.0, 300.0)));
        assert_eq!(look.moved(id, Vec2::new(510.0, 295.0)), Some(Vec2::new(10.0, -5.0)));
        assert_eq!(look.moved(id, Vec2::new(512.0, 295.0)), Some(Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn end_stops_deltas() {
        let mut look = TouchLook::new();
        let id = TouchId(1);
        look.begin(id, Vec2::new(500.0, 300.0));
        assert!(look.end(id));
        assert_eq!(look.moved(id, Vec2::new(600.0, 300.0)), None);
        assert!(!look.is_active());
    }

    #[test]
    fn second_touch_does_not_steal_ownership() {
        let mut look = TouchLook::new();
        look.begin(TouchId(1), Vec2::new(500.0, 300.0));
        assert!(!look.begin(TouchId(2), Vec2::new(700.0, 300.0)));
        assert_eq!(look.moved(TouchId(2), Vec2::new(710.0, 300.0)), None);
        assert!(!look.end(TouchId(2)));
        assert_eq!(look.owner(), Some(TouchId(1)));
    }

    #[test]
    fn restart_after_end_uses_new_origin() {
        let mut look = TouchLook::new();
        let id = TouchId(3);
        look.begin(id, Vec2::new(500.0, 300.0));
        look.end(id);
        look.begin(id, Vec2::new(100.0, 100.0));
        assert_eq!(look.moved(id, Vec2::new(101.0, 100.0)), Some(Vec2::new(1.0, 0.0)));
    }
}
