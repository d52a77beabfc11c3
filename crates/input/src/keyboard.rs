use std::collections::HashSet;

use crate::action::{KeyAction, KeyBindings};

/// Held-key state for the keyboard channel.
///
/// Polled, not event-driven: key events only update the held set, and the
/// controller asks "is forward held right now" once per frame.
#[derive(Debug, Clone)]
pub struct KeyboardState {
    bindings: KeyBindings,
    held: HashSet<String>,
}

impl KeyboardState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Record a key press. Returns the bound action, if any.
    pub fn key_down(&mut self, key: &str) -> Option<KeyAction> {
        let action = self.bindings.lookup(key);
        if action.is_some() && self.held.insert(key.to_string()) {
            tracing::trace!(key, ?action, "key held");
        }
        action
    }

    /// Record a key release. Returns the bound action, if any.
    pub fn key_up(&mut self, key: &str) -> Option<KeyAction> {
        self.held.remove(key);
        self.bindings.lookup(key)
    }

    /// Release every key, e.g. when the window loses focus and release
    /// events would never arrive.
    pub fn release_all(&mut self) {
        if !self.held.is_empty() {
            tracing::debug!(count = self.held.len(), "releasing all held keys");
        }
        self.held.clear();
    }

    /// True while any key bound to `action` is held.
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.bindings
            .keys_for(action)
            .iter()
            .any(|key| self.held.contains(key))
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}
