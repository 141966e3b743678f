//! The photo modal: staging of category toggles for one photo at a time.
//!
//! The modal is either closed or open on a catalog index with a staging
//! buffer. The buffer starts as a copy of the committed assignment and is the
//! only source of truth for what the user has selected until it is committed.
//!
//! Leaving the photo (navigating or closing) goes through one reconciliation
//! step: if the staged flags differ from the committed ones the user must
//! choose to save, discard, or stay. Hosts whose prompts do not block get a
//! [`PendingExit`] back and resume it once the choice is known.

use serde::{Deserialize, Serialize};

use crate::model::{Category, CategoryAssignment};
use crate::state::Direction;

/// What the user asked to do when leaving the current photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitIntent {
    /// Move to the nearest visible photo in a direction
    Navigate(Direction),
    /// Close the modal
    Close,
}

/// Answer to a "save changes?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmChoice {
    /// Save, then continue
    Accept,
    /// Discard, then continue
    Decline,
    /// Stay on the current photo
    Abort,
}

/// An exit waiting on the user's answer.
///
/// Produced by [`ModalSession::plan_exit`]; consumed by [`PendingExit::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingExit {
    index: usize,
    intent: ExitIntent,
}

impl PendingExit {
    /// Photo the exit was requested from.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn intent(&self) -> ExitIntent {
        self.intent
    }

    /// Turn the user's answer into the action to perform.
    pub fn resolve(self, choice: ConfirmChoice) -> ExitDecision {
        match choice {
            ConfirmChoice::Accept => ExitDecision::SaveThen(self.intent),
            ConfirmChoice::Decline => ExitDecision::DiscardThen(self.intent),
            ConfirmChoice::Abort => ExitDecision::Stay,
        }
    }
}

/// First step of leaving the current photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStep {
    /// No unsaved changes; continue with the intent directly
    Proceed(ExitIntent),
    /// Unsaved changes; ask the user first
    Confirm(PendingExit),
    /// The modal is closed, nothing to leave
    Inactive,
}

/// Resolved exit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    /// Commit the staging buffer, then continue
    SaveThen(ExitIntent),
    /// Drop the staging buffer, then continue
    DiscardThen(ExitIntent),
    /// Remain on the same photo with the buffer untouched
    Stay,
}

/// Modal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        /// Catalog index being edited
        index: usize,
        /// Staging buffer
        staged: CategoryAssignment,
    },
}

/// The modal state machine.
#[derive(Debug, Clone, Default)]
pub struct ModalSession {
    state: ModalState,
}

impl ModalSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// Index of the open photo.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            ModalState::Open { index, .. } => Some(index),
            ModalState::Closed => None,
        }
    }

    /// Staging buffer of the open photo.
    pub fn staged(&self) -> Option<CategoryAssignment> {
        match self.state {
            ModalState::Open { staged, .. } => Some(staged),
            ModalState::Closed => None,
        }
    }

    /// Open (or re-point) the modal on `index`, staging `committed`.
    pub fn open(&mut self, index: usize, committed: CategoryAssignment) {
        log::debug!("🖼️ Modal open on photo {}", index + 1);
        self.state = ModalState::Open {
            index,
            staged: committed,
        };
    }

    /// Close the modal, discarding the staging buffer.
    pub fn close(&mut self) {
        if let ModalState::Open { index, .. } = self.state {
            log::debug!("🖼️ Modal closed on photo {}", index + 1);
        }
        self.state = ModalState::Closed;
    }

    /// Flip a staged flag. Returns the new value, or `None` when closed.
    pub fn toggle(&mut self, category: Category) -> Option<bool> {
        match &mut self.state {
            ModalState::Open { staged, .. } => Some(staged.toggle(category)),
            ModalState::Closed => None,
        }
    }

    /// Reset the staging buffer to `committed`.
    pub fn revert(&mut self, committed: CategoryAssignment) {
        if let ModalState::Open { staged, .. } = &mut self.state {
            *staged = committed;
        }
    }

    /// Whether the staged flags differ from `committed`.
    ///
    /// Compared as sets of set flags, so an absent record equals an all-false
    /// buffer.
    pub fn has_unsaved_changes(&self, committed: &CategoryAssignment) -> bool {
        match &self.state {
            ModalState::Open { staged, .. } => staged.categories().ne(committed.categories()),
            ModalState::Closed => false,
        }
    }

    /// Decide whether leaving toward `intent` needs confirmation.
    pub fn plan_exit(&self, intent: ExitIntent, committed: &CategoryAssignment) -> ExitStep {
        let Some(index) = self.current_index() else {
            return ExitStep::Inactive;
        };
        if self.has_unsaved_changes(committed) {
            log::debug!("Unsaved changes on photo {}, confirmation needed", index + 1);
            ExitStep::Confirm(PendingExit { index, intent })
        } else {
            ExitStep::Proceed(intent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_stages_committed() {
        let committed = CategoryAssignment::with(&[Category::CajaFotos]);
        let mut modal = ModalSession::new();
        modal.open(3, committed);
        assert_eq!(modal.current_index(), Some(3));
        assert_eq!(modal.staged(), Some(committed));
        assert!(!modal.has_unsaved_changes(&committed));
    }

    #[test]
    fn test_toggle_when_closed() {
        let mut modal = ModalSession::new();
        assert_eq!(modal.toggle(Category::Impresion), None);
        assert_eq!(modal.staged(), None);
    }

    #[test]
    fn test_descartada_toggle_clears_staged() {
        let mut modal = ModalSession::new();
        modal.open(0, CategoryAssignment::new());
        modal.toggle(Category::Impresion);
        modal.toggle(Category::Descartada);
        assert_eq!(
            modal.staged(),
            Some(CategoryAssignment::with(&[Category::Descartada]))
        );
    }

    #[test]
    fn test_toggle_back_is_not_a_change() {
        let committed = CategoryAssignment::with(&[Category::Impresion]);
        let mut modal = ModalSession::new();
        modal.open(1, committed);
        modal.toggle(Category::RedesSociales);
        assert!(modal.has_unsaved_changes(&committed));
        modal.toggle(Category::RedesSociales);
        assert!(!modal.has_unsaved_changes(&committed));
    }

    #[test]
    fn test_plan_exit() {
        let committed = CategoryAssignment::new();
        let mut modal = ModalSession::new();
        assert_eq!(modal.plan_exit(ExitIntent::Close, &committed), ExitStep::Inactive);

        modal.open(2, committed);
        assert_eq!(
            modal.plan_exit(ExitIntent::Navigate(Direction::Next), &committed),
            ExitStep::Proceed(ExitIntent::Navigate(Direction::Next))
        );

        modal.toggle(Category::CajaUsb);
        let ExitStep::Confirm(pending) = modal.plan_exit(ExitIntent::Close, &committed) else {
            panic!("expected confirmation");
        };
        assert_eq!(pending.index(), 2);
        assert_eq!(pending.resolve(ConfirmChoice::Accept), ExitDecision::SaveThen(ExitIntent::Close));
        assert_eq!(pending.resolve(ConfirmChoice::Decline), ExitDecision::DiscardThen(ExitIntent::Close));
        assert_eq!(pending.resolve(ConfirmChoice::Abort), ExitDecision::Stay);
    }

    #[test]
    fn test_revert_and_close() {
        let committed = CategoryAssignment::with(&[Category::Impresion]);
        let mut modal = ModalSession::new();
        modal.open(5, committed);
        modal.toggle(Category::Impresion);
        modal.revert(committed);
        assert_eq!(modal.staged(), Some(committed));

        modal.close();
        assert_eq!(modal.state(), ModalState::Closed);
        assert!(!modal.has_unsaved_changes(&committed));
    }
}
