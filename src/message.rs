//! Application message types.
//!
//! All UI events are represented as messages in the Elm architecture style
//! and dispatched through [`crate::SelectorApp::update`].

use crate::keybindings::Key;
use crate::model::{Category, FeedbackList};
use crate::state::{Direction, Filter};

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Gallery filter button clicked
    SetFilter(Filter),
    /// Photo modal events
    Modal(ModalMessage),
    /// Feedback form events
    Feedback(FeedbackMessage),
    /// Toolbar and page lifecycle events
    Library(LibraryMessage),
    /// Key pressed anywhere on the page
    KeyPressed(Key),
}

/// Photo modal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// Gallery card clicked
    Open(usize),
    /// Category option button clicked
    Toggle(Category),
    /// Save button clicked (saves, then closes)
    Save,
    /// Prev/next control clicked
    Navigate(Direction),
    /// Close button, cancel button or backdrop clicked
    Close,
}

/// Feedback form events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackMessage {
    AddVideo { minute: String, change: String },
    /// `number` is raw form input
    AddPhoto { number: String, change: String },
    Remove(FeedbackList, usize),
}

/// Toolbar and page lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryMessage {
    /// Download the JSON report
    Export,
    /// Copy the text summary
    CopySummary,
    /// Wipe every selection (asks first)
    ClearAll,
    /// Page became hidden
    PageHidden,
    /// Page is unloading
    Unload,
}
