//! winit adapter: translates window events into aggregator input.

use glam::Vec2;
use winit::event::{Touch, TouchPhase as WinitTouchPhase};
use winit::keyboard::KeyCode;

use crate::touch::{TouchEvent, TouchId, TouchPhase};

/// Physical key name used by the binding table, for the keys it can bind.
pub fn key_name(code: KeyCode) -> Option<&'static str> {
    let name = match code {
        KeyCode::KeyW => "KeyW",
        KeyCode::KeyA => "KeyA",
        KeyCode::KeyS => "KeyS",
        KeyCode::KeyD => "KeyD",
        KeyCode::ArrowUp => "ArrowUp",
        KeyCode::ArrowDown => "ArrowDown",
        KeyCode::ArrowLeft => "ArrowLeft",
        KeyCode::ArrowRight => "ArrowRight",
        KeyCode::Space => "Space",
        KeyCode::Enter => "Enter",
        KeyCode::Escape => "Escape",
        _ => return None,
    };
    Some(name)
}

pub fn touch_event(touch: &Touch) -> TouchEvent {
    let phase = match touch.phase {
        WinitTouchPhase::Started => TouchPhase::Started,
        WinitTouchPhase::Moved => TouchPhase::Moved,
        WinitTouchPhase::Ended => TouchPhase::Ended,
        WinitTouchPhase::Cancelled => TouchPhase::Cancelled,
    };
    TouchEvent {
        id: TouchId(touch.id),
        phase,
        position: Vec2::new(touch.location.x as f32, touch.location.y as f32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::KeyBindings;

    #[test]
    fn default_bindings_have_key_names() {
        let table = KeyBindings::default();
        for code in [KeyCode::KeyW, KeyCode::ArrowDown, KeyCode::KeyA, KeyCode::Space] {
            let name = key_name(code).unwrap();
            assert!(table.lookup(name).is_some(), "{name} should be bound");
        }
    }

    #[test]
    fn unmapped_keys_have_no_name() {
        assert_eq!(key_name(KeyCode::F12), None);
    }
}
