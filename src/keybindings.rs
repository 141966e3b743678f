//! Keyboard shortcuts for the photo modal.
//!
//! Keys only act while the modal is open: Escape closes, Enter saves,
//! the arrow keys move between visible photos, and the digit keys toggle
//! categories by position.

use serde::{Deserialize, Serialize};

use crate::model::Category;
use crate::state::Direction;

/// A key, as reported by `KeyboardEvent.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Enter,
    ArrowLeft,
    ArrowRight,
    /// Digit key 0-9
    Digit(u8),
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value. Unhandled keys yield `None`.
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(Key::Escape),
            "Enter" => Some(Key::Enter),
            "ArrowLeft" | "Left" => Some(Key::ArrowLeft),
            "ArrowRight" | "Right" => Some(Key::ArrowRight),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_digit(10).map(|d| Key::Digit(d as u8)),
                    _ => None,
                }
            }
        }
    }
}

/// Number of categories that can have hotkeys.
pub const MAX_CATEGORY_HOTKEYS: usize = Category::ALL.len();

/// Action a key triggers in the open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Close,
    Save,
    Navigate(Direction),
    Toggle(Category),
}

/// Keybinding configuration for the modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub close: Key,
    pub save: Key,
    pub prev: Key,
    pub next: Key,

    /// Hotkeys for categories in display order.
    /// None means no hotkey assigned for that slot
    #[serde(default = "default_category_hotkeys")]
    pub category_hotkeys: [Option<Key>; MAX_CATEGORY_HOTKEYS],
}

fn default_category_hotkeys() -> [Option<Key>; MAX_CATEGORY_HOTKEYS] {
    [
        Some(Key::Digit(1)),
        Some(Key::Digit(2)),
        Some(Key::Digit(3)),
        Some(Key::Digit(4)),
        Some(Key::Digit(5)),
    ]
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            close: Key::Escape,
            save: Key::Enter,
            prev: Key::ArrowLeft,
            next: Key::ArrowRight,
            category_hotkeys: default_category_hotkeys(),
        }
    }
}

impl KeyBindings {
    /// Create new keybindings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the modal action that corresponds to a key press, if any.
    pub fn action_for_key(&self, key: Key) -> Option<KeyAction> {
        if key == self.close {
            Some(KeyAction::Close)
        } else if key == self.save {
            Some(KeyAction::Save)
        } else if key == self.prev {
            Some(KeyAction::Navigate(Direction::Prev))
        } else if key == self.next {
            Some(KeyAction::Navigate(Direction::Next))
        } else {
            self.category_for_key(key).map(KeyAction::Toggle)
        }
    }

    /// Get the category bound to a key, if any.
    pub fn category_for_key(&self, key: Key) -> Option<Category> {
        self.category_hotkeys
            .iter()
            .position(|hotkey| *hotkey == Some(key))
            .and_then(|i| Category::from_position(i + 1))
    }
}
