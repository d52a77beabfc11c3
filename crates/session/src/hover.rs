use gallery_common::FrameId;

/// A change in which frame the crosshair rests on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverEvent {
    Entered(FrameId),
    Left(FrameId),
}

/// Turns per-frame pick results into enter/leave messages.
///
/// Only changes produce events, and a switch between two frames always
/// leaves the old one before entering the new one.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    current: Option<FrameId>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&FrameId> {
        self.current.as_ref()
    }

    pub fn update(&mut self, hit: Option<&FrameId>) -> Vec<HoverEvent> {
        if self.current.as_ref() == hit {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if let Some(old) = self.current.take() {
            events.push(HoverEvent::Left(old));
        }
        if let Some(new) = hit {
            self.current = Some(new.clone());
            events.push(HoverEvent::Entered(new.clone()));
        }
        events
    }
}
