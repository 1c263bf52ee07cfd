//! Keyboard state tracking
//!
//! Keys are stored by their lower-cased `KeyboardEvent.key` value, so
//! `"W"` with caps lock and `"w"` are the same key.

use std::collections::HashSet;

use crate::sim::ControlInput;

/// Set of keys currently held down
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    keys: HashSet<String>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.keys.insert(key.to_lowercase());
    }

    pub fn release(&mut self, key: &str) {
        self.keys.remove(&key.to_lowercase());
    }

    /// Drop everything (window lost focus, keyup events will never arrive)
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.keys.contains(&key.to_lowercase())
    }

    /// Directional intents: arrow keys or WASD
    pub fn controls(&self) -> ControlInput {
        ControlInput {
            up: self.is_held("arrowup") || self.is_held("w"),
            down: self.is_held("arrowdown") || self.is_held("s"),
            left: self.is_held("arrowleft") || self.is_held("a"),
            right: self.is_held("arrowright") || self.is_held("d"),
        }
    }
}
