//! Main application controller.

use chrono::{DateTime, Local, Utc};

use crate::config::AppConfig;
use crate::format::{Report, build_report, build_text_summary, report_filename};
use crate::frontend::{ConfirmKind, Frontend, NotificationLevel};
use crate::handlers::{handle_feedback, handle_key};
use crate::message::{FeedbackMessage, LibraryMessage, Message, ModalMessage};
use crate::model::{Catalog, Category, CategoryAssignment, FeedbackLog, display_number};
use crate::state::{
    ConfirmChoice, Direction, ExitDecision, ExitIntent, ExitStep, Filter, ModalSession,
    PendingExit, SelectionStore, Stats, compute_stats, find_nearest_visible,
};
use crate::storage::{self, KeyValueStore};
use crate::view::{FilterButton, GalleryCard, ModalView, StatsView, filter_buttons, gallery_cards};

const SAVE_FAILED: &str = "Error al guardar. Verifica el espacio del navegador.";

/// How an attempt to leave the current photo ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Modal now shows this photo
    Navigated(usize),
    /// No visible photo in that direction; nothing changed
    NoTarget,
    /// Modal closed
    Closed,
    /// User chose to stay; nothing changed
    Cancelled,
    /// Modal was not open (or a pending exit went stale)
    Inactive,
}

/// The photo selector: owns all session state and reacts to UI messages.
pub struct SelectorApp<S: KeyValueStore> {
    config: AppConfig,
    catalog: Catalog,
    selections: SelectionStore,
    feedback: FeedbackLog,
    filter: Filter,
    modal: ModalSession,
    store: S,
}

impl<S: KeyValueStore> SelectorApp<S> {
    /// Create the app, loading persisted selections and feedback from `store`.
    pub fn new(catalog: Catalog, config: AppConfig, store: S) -> Self {
        let selections = SelectionStore::load(&store, &config.storage.selections, catalog.len());
        let feedback = match storage::load_json::<FeedbackLog, S>(&store, &config.storage.feedback) {
            Ok(Some(feedback)) => feedback,
            Ok(None) => FeedbackLog::new(),
            Err(e) => {
                log::error!("Failed to load feedback, starting empty: {}", e);
                FeedbackLog::new()
            }
        };

        log::info!(
            "Photo selector ready: {} photos, {} classified, {} notes",
            catalog.len(),
            selections.len(),
            feedback.video.len() + feedback.photos.len()
        );

        Self {
            config,
            catalog,
            selections,
            feedback,
            filter: Filter::All,
            modal: ModalSession::new(),
            store,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selections(&self) -> &SelectionStore {
        &self.selections
    }

    pub fn feedback(&self) -> &FeedbackLog {
        &self.feedback
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn modal(&self) -> &ModalSession {
        &self.modal
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn stats(&self) -> Stats {
        compute_stats(&self.selections, self.catalog.len())
    }

    /// Dispatch a UI message.
    pub fn update(&mut self, message: Message, frontend: &mut impl Frontend) {
        match message {
            Message::SetFilter(filter) => self.set_filter(filter, frontend),
            Message::Modal(msg) => self.handle_modal(msg, frontend),
            Message::Feedback(msg) => self.handle_feedback(msg, frontend),
            Message::Library(msg) => self.handle_library(msg, frontend),
            Message::KeyPressed(key) => {
                if let Some(msg) = handle_key(key, &self.config.keybindings, self.modal.is_open()) {
                    self.handle_modal(msg, frontend);
                }
            }
        }
    }

    fn handle_modal(&mut self, msg: ModalMessage, frontend: &mut impl Frontend) {
        match msg {
            ModalMessage::Open(index) => self.open_photo(index, frontend),
            ModalMessage::Toggle(category) => {
                self.toggle_category(category, frontend);
            }
            ModalMessage::Save => {
                if self.save_selection(frontend) {
                    self.close_modal(frontend);
                }
            }
            ModalMessage::Navigate(direction) => {
                self.navigate(direction, frontend);
            }
            ModalMessage::Close => {
                self.close_modal(frontend);
            }
        }
    }

    fn handle_feedback(&mut self, msg: FeedbackMessage, frontend: &mut impl Frontend) {
        match handle_feedback(msg, &mut self.feedback, self.catalog.len()) {
            Ok(change) => {
                self.persist_feedback(frontend);
                frontend.render_feedback(&self.feedback);
                frontend.notify(NotificationLevel::Success, change.message());
            }
            Err(e) => {
                log::warn!("Feedback rejected: {}", e);
                frontend.notify(NotificationLevel::Error, &e.to_string());
            }
        }
    }

    fn handle_library(&mut self, msg: LibraryMessage, frontend: &mut impl Frontend) {
        match msg {
            LibraryMessage::Export => self.export_report(frontend),
            LibraryMessage::CopySummary => self.copy_summary(frontend),
            LibraryMessage::ClearAll => {
                self.clear_all(frontend);
            }
            LibraryMessage::PageHidden => {
                log::info!("Page hidden, saving selections");
                self.flush(frontend);
            }
            LibraryMessage::Unload => self.flush(frontend),
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Redraw everything.
    pub fn render_all(&self, frontend: &mut impl Frontend) {
        self.render_library(frontend);
        frontend.render_feedback(&self.feedback);
        frontend.render_modal(self.modal_view().as_ref());
    }

    /// Redraw the gallery, counters and filter buttons.
    fn render_library(&self, frontend: &mut impl Frontend) {
        let stats = self.stats();
        frontend.render_gallery(&self.gallery());
        frontend.render_stats(&StatsView::new(&stats));
        frontend.render_filters(&filter_buttons(&stats, self.catalog.len(), self.filter));
    }

    pub fn gallery(&self) -> Vec<GalleryCard> {
        gallery_cards(&self.catalog, &self.selections, self.filter)
    }

    pub fn filter_buttons(&self) -> Vec<FilterButton> {
        filter_buttons(&self.stats(), self.catalog.len(), self.filter)
    }

    /// Contents of the open modal, if any.
    pub fn modal_view(&self) -> Option<ModalView> {
        let index = self.modal.current_index()?;
        let staged = self.modal.staged()?;
        Some(ModalView {
            index,
            number: display_number(index),
            path: self.catalog.path(index)?.to_string(),
            staged,
            has_prev: self.neighbour(index, Direction::Prev).is_some(),
            has_next: self.neighbour(index, Direction::Next).is_some(),
        })
    }

    fn neighbour(&self, index: usize, direction: Direction) -> Option<usize> {
        find_nearest_visible(index, direction, self.filter, &self.selections, self.catalog.len())
    }

    // ------------------------------------------------------------------
    // Selection store
    // ------------------------------------------------------------------

    /// Commit `assignment` for `index` and persist.
    ///
    /// A persistence failure is reported but the in-memory commit stands.
    /// Indices outside the catalog are ignored.
    pub fn commit(&mut self, index: usize, assignment: CategoryAssignment, frontend: &mut impl Frontend) {
        if !self.catalog.contains(index) {
            log::warn!("Ignoring commit for photo index {} outside the catalog", index);
            return;
        }
        self.selections.commit(index, assignment);
        self.persist_selections(frontend);
    }

    fn persist_selections(&mut self, frontend: &mut impl Frontend) -> bool {
        match self.selections.save(&mut self.store, &self.config.storage.selections) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Error saving selections: {}", e);
                frontend.notify(NotificationLevel::Error, SAVE_FAILED);
                false
            }
        }
    }

    fn persist_feedback(&mut self, frontend: &mut impl Frontend) -> bool {
        match storage::save_json(&mut self.store, &self.config.storage.feedback, &self.feedback) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Error saving feedback: {}", e);
                frontend.notify(NotificationLevel::Error, SAVE_FAILED);
                false
            }
        }
    }

    /// Save both stores again (page hidden / unload).
    pub fn flush(&mut self, frontend: &mut impl Frontend) {
        self.persist_selections(frontend);
        self.persist_feedback(frontend);
    }

    /// Wipe every selection after confirmation. Returns whether it happened.
    pub fn clear_all(&mut self, frontend: &mut impl Frontend) -> bool {
        if frontend.confirm(ConfirmKind::ClearAll) != ConfirmChoice::Accept {
            log::debug!("Clear all cancelled");
            return false;
        }

        self.selections.clear();
        self.persist_selections(frontend);
        // The open photo is re-staged from the now empty store
        if let Some(index) = self.modal.current_index() {
            self.modal.revert(self.selections.assignment(index));
            frontend.render_modal(self.modal_view().as_ref());
        }
        self.render_library(frontend);
        log::info!("All selections cleared");
        frontend.notify(
            NotificationLevel::Success,
            "Todas las selecciones han sido eliminadas",
        );
        true
    }

    // ------------------------------------------------------------------
    // Filter
    // ------------------------------------------------------------------

    pub fn set_filter(&mut self, filter: Filter, frontend: &mut impl Frontend) {
        log::debug!("Setting filter to: {}", filter.slug());
        self.filter = filter;
        frontend.render_gallery(&self.gallery());
        frontend.render_filters(&self.filter_buttons());
        if self.modal.is_open() {
            frontend.render_modal(self.modal_view().as_ref());
        }
    }

    // ------------------------------------------------------------------
    // Modal
    // ------------------------------------------------------------------

    /// Open the modal on `index`.
    ///
    /// An already open modal is simply re-pointed; the gallery is hidden
    /// behind the modal so this only happens through direct API use.
    pub fn open_photo(&mut self, index: usize, frontend: &mut impl Frontend) {
        if !self.catalog.contains(index) {
            log::warn!("Ignoring open for photo index {} outside the catalog", index);
            return;
        }
        self.modal.open(index, self.selections.assignment(index));
        frontend.render_modal(self.modal_view().as_ref());
    }

    /// Flip a staged flag, warning when a soft limit would be exceeded.
    ///
    /// Returns the new flag value, or `None` when the modal is closed.
    pub fn toggle_category(&mut self, category: Category, frontend: &mut impl Frontend) -> Option<bool> {
        let selected = self.modal.toggle(category)?;

        if selected {
            let future_count = self.stats().count(category) + 1;
            if let Some(warning) = category.limit_warning(future_count) {
                frontend.notify(NotificationLevel::Warning, &warning);
            }
        }

        frontend.render_modal(self.modal_view().as_ref());
        Some(selected)
    }

    /// Whether the staged flags differ from the committed ones.
    pub fn has_unsaved_changes(&self) -> bool {
        self.modal
            .current_index()
            .is_some_and(|index| self.modal.has_unsaved_changes(&self.selections.assignment(index)))
    }

    /// Commit the staging buffer; the modal stays open on the same photo.
    ///
    /// Returns false when the modal is closed.
    pub fn save_selection(&mut self, frontend: &mut impl Frontend) -> bool {
        let (Some(index), Some(staged)) = (self.modal.current_index(), self.modal.staged()) else {
            return false;
        };

        self.commit(index, staged, frontend);
        self.render_library(frontend);
        frontend.render_modal(self.modal_view().as_ref());
        frontend.notify(NotificationLevel::Success, "Selección guardada correctamente");
        true
    }

    /// Move to the nearest visible photo in `direction`.
    pub fn navigate(&mut self, direction: Direction, frontend: &mut impl Frontend) -> ExitOutcome {
        self.exit_modal(ExitIntent::Navigate(direction), frontend)
    }

    /// Close the modal.
    pub fn close_modal(&mut self, frontend: &mut impl Frontend) -> ExitOutcome {
        self.exit_modal(ExitIntent::Close, frontend)
    }

    /// Leave the current photo, asking the frontend synchronously when there
    /// are unsaved changes.
    fn exit_modal(&mut self, intent: ExitIntent, frontend: &mut impl Frontend) -> ExitOutcome {
        match self.request_exit(intent) {
            ExitStep::Inactive => ExitOutcome::Inactive,
            ExitStep::Proceed(intent) => self.continue_exit(intent, frontend),
            ExitStep::Confirm(pending) => {
                let kind = match intent {
                    ExitIntent::Navigate(_) => ConfirmKind::SaveBeforeNavigate,
                    ExitIntent::Close => ConfirmKind::SaveBeforeClose,
                };
                let choice = frontend.confirm(kind);
                self.resume_exit(pending, choice, frontend)
            }
        }
    }

    /// First half of leaving the current photo, for hosts with non-blocking
    /// prompts.
    ///
    /// `Confirm` carries a [`PendingExit`] to hand to [`Self::resume_exit`]
    /// once the user has answered. `Proceed` needs no answer; finish it with
    /// [`Self::proceed_exit`]. Navigation with no visible photo in that
    /// direction always proceeds (and then does nothing).
    pub fn request_exit(&self, intent: ExitIntent) -> ExitStep {
        let Some(index) = self.modal.current_index() else {
            return ExitStep::Inactive;
        };
        if let ExitIntent::Navigate(direction) = intent {
            // Buttons toward a boundary are disabled; never prompt for them
            if self.neighbour(index, direction).is_none() {
                return ExitStep::Proceed(intent);
            }
        }
        self.modal.plan_exit(intent, &self.selections.assignment(index))
    }

    /// Second half of leaving the current photo.
    ///
    /// A pending exit whose photo is no longer open is stale and ignored.
    pub fn resume_exit(
        &mut self,
        pending: PendingExit,
        choice: ConfirmChoice,
        frontend: &mut impl Frontend,
    ) -> ExitOutcome {
        if self.modal.current_index() != Some(pending.index()) {
            log::warn!("Ignoring stale exit request for photo {}", pending.index() + 1);
            return ExitOutcome::Inactive;
        }

        match pending.resolve(choice) {
            ExitDecision::SaveThen(intent) => {
                self.save_selection(frontend);
                self.continue_exit(intent, frontend)
            }
            ExitDecision::DiscardThen(intent) => {
                log::debug!("Discarding staged changes on photo {}", pending.index() + 1);
                self.modal.revert(self.selections.assignment(pending.index()));
                self.continue_exit(intent, frontend)
            }
            ExitDecision::Stay => {
                log::debug!("Exit cancelled, staying on photo {}", pending.index() + 1);
                ExitOutcome::Cancelled
            }
        }
    }

    /// Finish an exit that [`Self::request_exit`] allowed without a prompt.
    ///
    /// Unsaved changes are re-checked; if they appeared in the meantime
    /// nothing happens and `Cancelled` is returned.
    pub fn proceed_exit(&mut self, intent: ExitIntent, frontend: &mut impl Frontend) -> ExitOutcome {
        match self.request_exit(intent) {
            ExitStep::Inactive => ExitOutcome::Inactive,
            ExitStep::Proceed(intent) => self.continue_exit(intent, frontend),
            ExitStep::Confirm(_) => ExitOutcome::Cancelled,
        }
    }

    /// Perform `intent` once unsaved changes are resolved.
    fn continue_exit(&mut self, intent: ExitIntent, frontend: &mut impl Frontend) -> ExitOutcome {
        let Some(index) = self.modal.current_index() else {
            return ExitOutcome::Inactive;
        };

        match intent {
            ExitIntent::Close => {
                self.modal.close();
                frontend.render_modal(None);
                ExitOutcome::Closed
            }
            ExitIntent::Navigate(direction) => match self.neighbour(index, direction) {
                Some(target) => {
                    log::debug!("Navigating {:?}: {} -> {}", direction, index + 1, target + 1);
                    self.modal.open(target, self.selections.assignment(target));
                    frontend.render_modal(self.modal_view().as_ref());
                    ExitOutcome::Navigated(target)
                }
                None => {
                    log::debug!("No visible photo {:?} of {}", direction, index + 1);
                    ExitOutcome::NoTarget
                }
            },
        }
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Report snapshot at `exported_at`.
    pub fn report(&self, exported_at: DateTime<Utc>) -> Report {
        build_report(
            &self.selections,
            &self.catalog,
            &self.feedback,
            &self.config.event,
            exported_at,
        )
    }

    /// Text summary stamped with the current local time.
    pub fn text_summary(&self) -> String {
        let generated_at = Local::now().format("%d/%m/%Y, %H:%M:%S").to_string();
        build_text_summary(
            &self.selections,
            &self.catalog,
            &self.config.event.summary_title,
            &generated_at,
        )
    }

    /// Hand the report to the frontend as a download.
    pub fn export_report(&self, frontend: &mut impl Frontend) {
        let now = Utc::now();
        let report = self.report(now);
        let json = match report.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize report: {}", e);
                frontend.notify(NotificationLevel::Error, "No se pudo generar el reporte");
                return;
            }
        };

        let filename = report_filename(&self.config.event, now);
        match frontend.download(&filename, &json) {
            Ok(()) => {
                log::info!("📥 Report exported as {}", filename);
                frontend.notify(
                    NotificationLevel::Success,
                    &format!(
                        "📥 Reporte descargado. ¡Envíalo por WhatsApp al {}!",
                        self.config.event.contact
                    ),
                );
            }
            Err(e) => {
                log::error!("Report download failed: {}", e);
                frontend.notify(NotificationLevel::Error, "No se pudo descargar el reporte");
            }
        }
    }

    /// Hand the text summary to the frontend's clipboard.
    pub fn copy_summary(&self, frontend: &mut impl Frontend) {
        let summary = self.text_summary();
        match frontend.copy_text(&summary) {
            Ok(()) => frontend.notify(NotificationLevel::Success, "Resumen copiado al portapapeles"),
            Err(e) => {
                log::error!("Clipboard copy failed: {}", e);
                frontend.notify(NotificationLevel::Error, "No se pudo copiar el resumen");
            }
        }
    }
}
