//! Keyboard input handling

use game_core::Key;
use winit::keyboard::KeyCode;

/// Logical paddle key for a physical key, if it drives one
pub fn logical_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::KeyW => Some(Key::LeftUp),
        KeyCode::KeyS => Some(Key::LeftDown),
        KeyCode::ArrowUp => Some(Key::RightUp),
        KeyCode::ArrowDown => Some(Key::RightDown),
        _ => None,
    }
}
