use gallery_common::KeyBindingsConfig;
use std::collections::HashMap;

/// A logical action that one or more physical keys can trigger.
///
/// Locomotion polls actions, never raw key names, so rebinding keys does not
/// touch movement logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Forward,
    Backward,
    Left,
    Right,
    /// Bound for parity with the control scheme; locomotion has no vertical motion.
    Jump,
}

impl KeyAction {
    pub const ALL: [KeyAction; 5] = [
        KeyAction::Forward,
        KeyAction::Backward,
        KeyAction::Left,
        KeyAction::Right,
        KeyAction::Jump,
    ];
}

/// Key binding table: action to physical key names, plus the reverse lookup.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyAction, Vec<String>>,
    key_to_action: HashMap<String, KeyAction>,
}

impl KeyBindings {
    pub fn from_config(config: &KeyBindingsConfig) -> Self {
        let bindings = HashMap::from([
            (KeyAction::Forward, config.forward.clone()),
            (KeyAction::Backward, config.backward.clone()),
            (KeyAction::Left, config.left.clone()),
            (KeyAction::Right, config.right.clone()),
            (KeyAction::Jump, config.jump.clone()),
        ]);
        let mut table = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        table.rebuild_reverse_map();
        table
    }

    fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        // Iterate in a fixed order so a key bound twice always resolves the same way.
        for action in KeyAction::ALL {
            for key in self.bindings.get(&action).into_iter().flatten() {
                self.key_to_action.entry(key.clone()).or_insert(action);
            }
        }
    }

    /// Look up the action for a key name.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// Key names bound to an action.
    pub fn keys_for(&self, action: KeyAction) -> &[String] {
        self.bindings.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_config(&KeyBindingsConfig::default())
    }
}
