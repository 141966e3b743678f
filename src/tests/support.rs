//! Shared fixtures.

use std::collections::VecDeque;

use crate::frontend::{ConfirmKind, Frontend, NotificationLevel};
use crate::model::{Catalog, FeedbackLog};
use crate::state::ConfirmChoice;
use crate::storage::MemoryStore;
use crate::view::{FilterButton, GalleryCard, ModalView, StatsView};
use crate::{AppConfig, SelectorApp};

/// Frontend that records everything and answers prompts from a script.
#[derive(Debug, Default)]
pub struct RecordingFrontend {
    /// Answers handed out in order; `Abort` once exhausted
    pub answers: VecDeque<ConfirmChoice>,
    pub prompts: Vec<ConfirmKind>,
    pub notifications: Vec<(NotificationLevel, String)>,
    pub gallery: Vec<GalleryCard>,
    pub stats: Option<StatsView>,
    pub filters: Vec<FilterButton>,
    pub modal: Option<ModalView>,
    pub modal_renders: usize,
    pub feedback_renders: usize,
    pub downloads: Vec<(String, String)>,
    pub clipboard: Option<String>,
}

impl RecordingFrontend {
    pub fn answering(answers: &[ConfirmChoice]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn messages(&self, level: NotificationLevel) -> Vec<&str> {
        self.notifications
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

impl Frontend for RecordingFrontend {
    fn notify(&mut self, level: NotificationLevel, message: &str) {
        self.notifications.push((level, message.to_string()));
    }

    fn confirm(&mut self, kind: ConfirmKind) -> ConfirmChoice {
        self.prompts.push(kind);
        self.answers.pop_front().unwrap_or(ConfirmChoice::Abort)
    }

    fn render_gallery(&mut self, cards: &[GalleryCard]) {
        self.gallery = cards.to_vec();
    }

    fn render_stats(&mut self, stats: &StatsView) {
        self.stats = Some(stats.clone());
    }

    fn render_filters(&mut self, buttons: &[FilterButton]) {
        self.filters = buttons.to_vec();
    }

    fn render_modal(&mut self, modal: Option<&ModalView>) {
        self.modal = modal.cloned();
        self.modal_renders += 1;
    }

    fn render_feedback(&mut self, _feedback: &FeedbackLog) {
        self.feedback_renders += 1;
    }

    fn download(&mut self, filename: &str, contents: &str) -> Result<(), String> {
        self.downloads.push((filename.to_string(), contents.to_string()));
        Ok(())
    }

    fn copy_text(&mut self, text: &str) -> Result<(), String> {
        self.clipboard = Some(text.to_string());
        Ok(())
    }
}

/// App over a numbered catalog of `size` photos and an empty store.
pub fn app_with(size: usize) -> SelectorApp<MemoryStore> {
    SelectorApp::new(Catalog::numbered(size), AppConfig::default(), MemoryStore::new())
}

/// App over a numbered catalog and an existing store.
pub fn app_from_store(size: usize, store: MemoryStore) -> SelectorApp<MemoryStore> {
    SelectorApp::new(Catalog::numbered(size), AppConfig::default(), store)
}
