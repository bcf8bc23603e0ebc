//! Input events understood by the game
//!
//! Host events arrive as a name plus a key identifier string. Anything that
//! does not map onto the closed sets below is dropped here, so subscribers
//! only ever see well-formed events.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::events::NamedEvent;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Up,
    Right,
    Down,
    /// Fire
    Space,
    /// Dump engine state to the log
    Debug,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowUp" => Some(Key::Up),
            "ArrowRight" => Some(Key::Right),
            "ArrowDown" => Some(Key::Down),
            " " | "Spacebar" => Some(Key::Space),
            "d" | "D" => Some(Key::Debug),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Left => "ArrowLeft",
            Key::Up => "ArrowUp",
            Key::Right => "ArrowRight",
            Key::Down => "ArrowDown",
            Key::Space => " ",
            Key::Debug => "d",
        }
    }
}

/// Window-level input event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    PointerDown(Vec2),
}

impl InputEvent {
    /// Parse a host keyboard event; unknown names or keys yield `None`
    pub fn from_key_event(name: &str, key: &str) -> Option<Self> {
        let key = Key::from_dom(key)?;
        match name {
            "keydown" => Some(InputEvent::KeyDown(key)),
            "keyup" => Some(InputEvent::KeyUp(key)),
            _ => None,
        }
    }

    /// Parse a host pointer event
    pub fn from_pointer_event(name: &str, x: f32, y: f32) -> Option<Self> {
        match name {
            "mousedown" | "pointerdown" => Some(InputEvent::PointerDown(Vec2::new(x, y))),
            _ => None,
        }
    }
}

impl NamedEvent for InputEvent {
    fn name(&self) -> &'static str {
        match self {
            InputEvent::KeyDown(_) => "keydown",
            InputEvent::KeyUp(_) => "keyup",
            InputEvent::PointerDown(_) => "pointerdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        assert_eq!(
            InputEvent::from_key_event("keydown", "ArrowLeft"),
            Some(InputEvent::KeyDown(Key::Left))
        );
        assert_eq!(
            InputEvent::from_key_event("keyup", " "),
            Some(InputEvent::KeyUp(Key::Space))
        );
        for key in [Key::Left, Key::Up, Key::Right, Key::Down, Key::Space, Key::Debug] {
            assert_eq!(Key::from_dom(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_unknown_events_ignored() {
        assert_eq!(InputEvent::from_key_event("keydown", "q"), None);
        assert_eq!(InputEvent::from_key_event("keypress", "ArrowUp"), None);
        assert_eq!(InputEvent::from_pointer_event("mouseup", 1.0, 2.0), None);
        assert_eq!(
            InputEvent::from_pointer_event("mousedown", 1.0, 2.0),
            Some(InputEvent::PointerDown(Vec2::new(1.0, 2.0)))
        );
    }
}
