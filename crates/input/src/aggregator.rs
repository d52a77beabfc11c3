use gallery_common::InputConfig;
use glam::Vec2;

use crate::action::{KeyAction, KeyBindings};
use crate::intent::{LookDelta, MotionIntent};
use crate::joystick::{Joystick, base_center};
use crate::keyboard::KeyboardState;
use crate::pointer::PointerLook;
use crate::touch::{TouchEvent, TouchLook, TouchPhase, TouchZone};

/// Everything the locomotion controller consumes for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub motion: MotionIntent,
    pub look: LookDelta,
}

/// Normalizes every raw input source into [`MotionIntent`] and [`LookDelta`].
///
/// Owns the look accumulator exclusively. Pointer-lock and touch-look deltas
/// both add into it; [`InputAggregator::take_look_delta`] drains it, so a
/// delta is applied exactly once.
#[derive(Debug, Clone)]
pub struct InputAggregator {
    config: InputConfig,
    viewport: Vec2,
    keyboard: KeyboardState,
    joystick: Joystick,
    touch_look: TouchLook,
    pointer: PointerLook,
    look: LookDelta,
}

impl InputAggregator {
    pub fn new(config: &InputConfig, viewport: Vec2) -> Self {
        Self {
            viewport,
            keyboard: KeyboardState::new(KeyBindings::from_config(&config.key_bindings)),
            joystick: Joystick::for_viewport(config, viewport),
            touch_look: TouchLook::new(),
            pointer: PointerLook::new(config.pointer_lock_scale),
            look: LookDelta::ZERO,
            config: config.clone(),
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Update the viewport size; the joystick base follows the bottom edge.
    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.joystick.set_center(base_center(&self.config, viewport));
    }

    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    pub fn joystick(&self) -> &Joystick {
        &self.joystick
    }

    pub fn pointer(&self) -> &PointerLook {
        &self.pointer
    }

    // --- Keyboard ---
    pub fn key_down(&mut self, key: &str) -> Option<KeyAction> {
        self.keyboard.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> Option<KeyAction> {
        self.keyboard.key_up(key)
    }

    /// Focus loss: release keys and pointer lock, since their release events
    /// will not be delivered.
    pub fn focus_lost(&mut self) {
        self.keyboard.release_all();
        self.pointer.set_locked(false);
    }

    // --- Pointer lock ---
    pub fn set_pointer_locked(&mut self, locked: bool) {
        self.pointer.set_locked(locked);
    }

    /// Raw mouse motion in pixels. Ignored unless the pointer is locked.
    pub fn mouse_moved(&mut self, dx: f32, dy: f32) {
        if let Some((dx, dy)) = self.pointer.moved(dx, dy) {
            self.look.accumulate(dx, dy);
        }
    }

    // --- Touch ---
    /// Route a touch event. Starts are claimed by the zone they land in;
    /// moves and ends follow the touch id wherever the finger goes.
    pub fn touch(&mut self, event: TouchEvent) {
        let TouchEvent {
            id,
            phase,
            position,
        } = event;
        match phase {
            TouchPhase::Started => match TouchZone::classify(position, self.viewport) {
                TouchZone::Joystick => {
                    self.joystick.press(id, position);
                }
                TouchZone::Look => {
                    if self.touch_look.begin(id, position) {
                        tracing::trace!(?id, "touch look claimed");
                    }
                }
            },
            TouchPhase::Moved => {
                if !self.joystick.drag(id, position) {
                    if let Some(delta) = self.touch_look.moved(id, position) {
                        self.look.accumulate(delta.x, delta.y);
                    }
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if !self.joystick.release(id) && self.touch_look.end(id) {
                    tracing::trace!(?id, "touch look released");
                }
            }
        }
    }

    // --- Per-frame output ---
    /// Current motion intent. Does not consume anything.
    pub fn motion_intent(&self) -> MotionIntent {
        let stick = self.joystick.vector();
        MotionIntent {
            move_forward: self.keyboard.is_held(KeyAction::Forward),
            move_backward: self.keyboard.is_held(KeyAction::Backward),
            move_left: self.keyboard.is_held(KeyAction::Left),
            move_right: self.keyboard.is_held(KeyAction::Right),
            joystick_x: stick.x,
            joystick_y: stick.y,
        }
    }

    /// Drain the look accumulator. A second read without new input is zero.
    pub fn take_look_delta(&mut self) -> LookDelta {
        std::mem::take(&mut self.look)
    }

    /// Look accumulated so far, without draining it.
    pub fn pending_look(&self) -> LookDelta {
        self.look
    }

    /// Motion intent plus the drained look delta for one frame.
    pub fn frame_input(&mut self) -> FrameInput {
        FrameInput {
            motion: self.motion_intent(),
            look: self.take_look_delta(),
        }
    }
}
