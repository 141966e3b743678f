//! The presentation collaborator.
//!
//! The selector never draws anything itself. After each state change it calls
//! the render hooks of a [`Frontend`] with fresh view models, sends toast
//! notifications through [`Frontend::notify`], and asks [`Frontend::confirm`]
//! whenever a decision belongs to the user.

use serde::Serialize;

use crate::model::FeedbackLog;
use crate::state::ConfirmChoice;
use crate::view::{FilterButton, GalleryCard, ModalView, StatsView};

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    /// CSS-style class name.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        }
    }
}

/// What a confirmation prompt is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfirmKind {
    /// Unsaved changes before moving to another photo
    SaveBeforeNavigate,
    /// Unsaved changes before closing the modal
    SaveBeforeClose,
    /// Wiping every selection
    ClearAll,
}

impl ConfirmKind {
    /// Prompt text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            ConfirmKind::SaveBeforeNavigate => "¿Deseas guardar los cambios antes de continuar?",
            ConfirmKind::SaveBeforeClose => "¿Deseas guardar los cambios antes de salir?",
            ConfirmKind::ClearAll => {
                "¿Estás segura de que quieres borrar TODAS las selecciones? Esta acción no se puede deshacer."
            }
        }
    }
}

/// Presentation hooks.
///
/// Render hooks default to doing nothing so headless frontends only
/// implement what they need.
pub trait Frontend {
    /// Show a toast.
    fn notify(&mut self, level: NotificationLevel, message: &str);

    /// Ask the user a question with three possible outcomes.
    fn confirm(&mut self, kind: ConfirmKind) -> ConfirmChoice;

    fn render_gallery(&mut self, _cards: &[GalleryCard]) {}

    fn render_stats(&mut self, _stats: &StatsView) {}

    fn render_filters(&mut self, _buttons: &[FilterButton]) {}

    /// `None` when the modal is closed.
    fn render_modal(&mut self, _modal: Option<&ModalView>) {}

    fn render_feedback(&mut self, _feedback: &FeedbackLog) {}

    /// Offer `contents` as a file download.
    fn download(&mut self, _filename: &str, _contents: &str) -> Result<(), String> {
        Err("download not supported".to_string())
    }

    /// Put `text` on the clipboard.
    fn copy_text(&mut self, _text: &str) -> Result<(), String> {
        Err("clipboard not supported".to_string())
    }
}
