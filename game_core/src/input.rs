//! Logical keys and held-input queries
//!
//! The window layer maps physical keys onto these; the simulation only asks
//! whether a logical key is currently held.

use std::collections::HashSet;

/// Logical keys, two per paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

/// Pair of logical keys driving one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub up: Key,
    pub down: Key,
}

impl KeyBindings {
    pub const LEFT: Self = Self {
        up: Key::LeftUp,
        down: Key::LeftDown,
    };
    pub const RIGHT: Self = Self {
        up: Key::RightUp,
        down: Key::RightDown,
    };
}

/// Live input state, polled once per frame
pub trait InputState {
    fn is_held(&self, key: Key) -> bool;
}

/// Set of currently held logical keys
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: HashSet<Key>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Press or release depending on `pressed`
    pub fn set(&mut self, key: Key, pressed: bool) {
        if pressed {
            self.press(key);
        } else {
            self.release(key);
        }
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl InputState for HeldKeys {
    fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_press_release() {
        let mut keys = HeldKeys::new();
        assert!(!keys.is_held(Key::LeftUp));

        keys.press(Key::LeftUp);
        keys.press(Key::RightDown);
        assert!(keys.is_held(Key::LeftUp));
        assert!(keys.is_held(Key::RightDown));
        assert!(!keys.is_held(Key::LeftDown));

        keys.release(Key::LeftUp);
        assert!(!keys.is_held(Key::LeftUp));
    }

    #[test]
    fn test_held_keys_set_and_clear() {
        let mut keys = HeldKeys::new();
        keys.set(Key::RightUp, true);
        assert!(keys.is_held(Key::RightUp));
        keys.set(Key::RightUp, false);
        assert!(!keys.is_held(Key::RightUp));

        keys.press(Key::LeftDown);
        keys.clear();
        assert!(!keys.is_held(Key::LeftDown));
    }
}
