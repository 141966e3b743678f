//! Message handlers for the selector.
//!
//! Each handler processes a specific category of messages,
//! keeping the main `SelectorApp::update` function clean and organized.

use crate::keybindings::{Key, KeyAction, KeyBindings};
use crate::message::{FeedbackMessage, ModalMessage};
use crate::model::{FeedbackError, FeedbackList, FeedbackLog};

/// Result of a successful feedback edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackChange {
    AddedVideo,
    AddedPhoto,
    Removed(FeedbackList),
}

impl FeedbackChange {
    /// Toast shown after the change.
    pub fn message(&self) -> &'static str {
        match self {
            FeedbackChange::AddedVideo => "Sugerencia de video agregada",
            FeedbackChange::AddedPhoto => "Sugerencia de foto agregada",
            FeedbackChange::Removed(_) => "Sugerencia eliminada",
        }
    }
}

/// Handle feedback form messages.
///
/// On error the log is left untouched.
pub fn handle_feedback(
    msg: FeedbackMessage,
    feedback: &mut FeedbackLog,
    catalog_size: usize,
) -> Result<FeedbackChange, FeedbackError> {
    match msg {
        FeedbackMessage::AddVideo { minute, change } => {
            feedback.add_video(&minute, &change)?;
            Ok(FeedbackChange::AddedVideo)
        }
        FeedbackMessage::AddPhoto { number, change } => {
            feedback.add_photo(&number, &change, catalog_size)?;
            Ok(FeedbackChange::AddedPhoto)
        }
        FeedbackMessage::Remove(list, index) => {
            feedback.remove(list, index)?;
            Ok(FeedbackChange::Removed(list))
        }
    }
}

/// Translate a key press into a modal message.
///
/// Keys are ignored while the modal is closed.
pub fn handle_key(key: Key, bindings: &KeyBindings, modal_open: bool) -> Option<ModalMessage> {
    if !modal_open {
        return None;
    }
    let action = bindings.action_for_key(key)?;
    log::debug!("⌨️ {:?} -> {:?}", key, action);
    Some(match action {
        KeyAction::Close => ModalMessage::Close,
        KeyAction::Save => ModalMessage::Save,
        KeyAction::Navigate(direction) => ModalMessage::Navigate(direction),
        KeyAction::Toggle(category) => ModalMessage::Toggle(category),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::state::Direction;

    #[test]
    fn test_feedback_add_and_remove() {
        let mut feedback = FeedbackLog::new();
        let change = handle_feedback(
            FeedbackMessage::AddPhoto {
                number: "4".to_string(),
                change: "más luz".to_string(),
            },
            &mut feedback,
            5,
        );
        assert_eq!(change, Ok(FeedbackChange::AddedPhoto));

        let change = handle_feedback(
            FeedbackMessage::Remove(FeedbackList::Photos, 0),
            &mut feedback,
            5,
        );
        assert_eq!(change, Ok(FeedbackChange::Removed(FeedbackList::Photos)));
        assert!(feedback.is_empty());
    }

    #[test]
    fn test_feedback_error_leaves_log_untouched() {
        let mut feedback = FeedbackLog::new();
        feedback.add_video("0:01", "a").unwrap();
        let before = feedback.clone();

        let result = handle_feedback(
            FeedbackMessage::AddVideo {
                minute: " ".to_string(),
                change: "b".to_string(),
            },
            &mut feedback,
            5,
        );
        assert_eq!(result, Err(FeedbackError::EmptyField));
        assert_eq!(feedback, before);
    }

    #[test]
    fn test_keys_ignored_when_closed() {
        let bindings = KeyBindings::default();
        assert_eq!(handle_key(Key::Escape, &bindings, false), None);
        assert_eq!(handle_key(Key::Escape, &bindings, true), Some(ModalMessage::Close));
        assert_eq!(
            handle_key(Key::ArrowRight, &bindings, true),
            Some(ModalMessage::Navigate(Direction::Next))
        );
        assert_eq!(
            handle_key(Key::Digit(2), &bindings, true),
            Some(ModalMessage::Toggle(Category::CajaUsb))
        );
    }
}
