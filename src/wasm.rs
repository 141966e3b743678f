//! Browser bindings.
//!
//! The page owns the DOM. It constructs a [`WebSelector`] with two callbacks
//! and forwards user events to it:
//!
//! - `render(kind, json)` receives a view model whenever part of the page
//!   must be redrawn. `kind` is one of `gallery`, `stats`, `filters`,
//!   `modal` or `feedback`; `json` is the serialized view model (`null` for a
//!   closed modal).
//! - `toast(level, message)` shows a notification.
//!
//! An optional `copy(text)` callback puts text on the clipboard.

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::frontend::{ConfirmKind, Frontend, NotificationLevel};
use crate::keybindings::Key;
use crate::message::{FeedbackMessage, LibraryMessage, Message, ModalMessage};
use crate::model::{Catalog, Category, FeedbackList, FeedbackLog};
use crate::state::{ConfirmChoice, Direction, ExitIntent, ExitStep, Filter, PendingExit};
use crate::storage::LocalStorage;
use crate::view::{FilterButton, GalleryCard, ModalView, StatsView};
use crate::config::LogLevel;
use crate::{AppConfig, ExitOutcome, SelectorApp};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // The console logger passes every record; `log::max_level` does the
    // filtering so the configured level can raise it later.
    if let Err(e) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::log_1(&format!("Logger init failed: {}", e).into());
    }
    log::set_max_level(LogLevel::default().to_level_filter());
    log::info!("📷 Fotosel WASM starting...");
}

/// Frontend that forwards to page callbacks.
struct JsFrontend {
    render: js_sys::Function,
    toast: js_sys::Function,
    copy: Option<js_sys::Function>,
}

impl JsFrontend {
    fn send<T: Serialize + ?Sized>(&self, kind: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize {} view: {}", kind, e);
                return;
            }
        };
        if let Err(e) = self
            .render
            .call2(&JsValue::NULL, &JsValue::from_str(kind), &JsValue::from_str(&json))
        {
            log::error!("render({}) callback failed: {:?}", kind, e);
        }
    }
}

impl Frontend for JsFrontend {
    fn notify(&mut self, level: NotificationLevel, message: &str) {
        if let Err(e) = self.toast.call2(
            &JsValue::NULL,
            &JsValue::from_str(level.as_str()),
            &JsValue::from_str(message),
        ) {
            log::error!("toast callback failed: {:?}", e);
        }
    }

    /// `window.confirm` only has two answers, so Abort is never produced
    /// here. Pages that want the three-way prompt use
    /// [`WebSelector::request_close`] / [`WebSelector::request_navigate`].
    fn confirm(&mut self, kind: ConfirmKind) -> ConfirmChoice {
        let Some(window) = web_sys::window() else {
            return ConfirmChoice::Abort;
        };
        match window.confirm_with_message(kind.message()) {
            Ok(true) => ConfirmChoice::Accept,
            Ok(false) => ConfirmChoice::Decline,
            Err(e) => {
                log::error!("confirm() failed: {:?}", e);
                ConfirmChoice::Abort
            }
        }
    }

    fn render_gallery(&mut self, cards: &[GalleryCard]) {
        self.send("gallery", cards);
    }

    fn render_stats(&mut self, stats: &StatsView) {
        self.send("stats", stats);
    }

    fn render_filters(&mut self, buttons: &[FilterButton]) {
        self.send("filters", buttons);
    }

    fn render_modal(&mut self, modal: Option<&ModalView>) {
        self.send("modal", &modal);
    }

    fn render_feedback(&mut self, feedback: &FeedbackLog) {
        self.send("feedback", feedback);
    }

    fn download(&mut self, filename: &str, contents: &str) -> Result<(), String> {
        download_text(filename, contents, "application/json")
    }

    fn copy_text(&mut self, text: &str) -> Result<(), String> {
        let copy = self.copy.as_ref().ok_or("no clipboard callback")?;
        copy.call1(&JsValue::NULL, &JsValue::from_str(text))
            .map(|_| ())
            .map_err(|e| format!("{:?}", e))
    }
}

/// Trigger a browser download of `contents` through a temporary anchor.
fn download_text(filename: &str, contents: &str, mime: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("failed to create blob: {:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("failed to create object URL: {:?}", e))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("failed to create anchor: {:?}", e))?
        .dyn_into()
        .map_err(|_| "not an anchor element".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

fn outcome_name(outcome: ExitOutcome) -> &'static str {
    match outcome {
        ExitOutcome::Navigated(_) => "navigated",
        ExitOutcome::NoTarget => "no-target",
        ExitOutcome::Closed => "closed",
        ExitOutcome::Cancelled => "cancelled",
        ExitOutcome::Inactive => "inactive",
    }
}

fn parse_direction(direction: &str) -> Result<Direction, JsValue> {
    match direction {
        "next" => Ok(Direction::Next),
        "prev" => Ok(Direction::Prev),
        other => Err(JsValue::from_str(&format!("unknown direction '{}'", other))),
    }
}

fn parse_category(key: &str) -> Result<Category, JsValue> {
    Category::from_key(key).ok_or_else(|| JsValue::from_str(&format!("unknown category '{}'", key)))
}

fn parse_list(list: &str) -> Result<FeedbackList, JsValue> {
    match list {
        "video" => Ok(FeedbackList::Video),
        "photos" => Ok(FeedbackList::Photos),
        other => Err(JsValue::from_str(&format!("unknown feedback list '{}'", other))),
    }
}

/// The photo selector as seen from the page.
#[wasm_bindgen]
pub struct WebSelector {
    app: SelectorApp<LocalStorage>,
    frontend: JsFrontend,
    pending_exit: Option<PendingExit>,
}

#[wasm_bindgen]
impl WebSelector {
    /// Load persisted state and draw the initial page.
    #[wasm_bindgen(constructor)]
    pub fn new(
        render: js_sys::Function,
        toast: js_sys::Function,
        copy: Option<js_sys::Function>,
    ) -> Result<WebSelector, JsValue> {
        let store = LocalStorage::open().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let config = AppConfig::load_from_store(&store, crate::constants::storage::CONFIG_KEY)
            .unwrap_or_default();
        log::set_max_level(config.preferences.log_level.to_level_filter());
        log::debug!("Log level set to {:?}", config.preferences.log_level);

        let app = SelectorApp::new(Catalog::event(), config, store);
        let mut frontend = JsFrontend { render, toast, copy };
        app.render_all(&mut frontend);

        Ok(WebSelector {
            app,
            frontend,
            pending_exit: None,
        })
    }

    fn dispatch(&mut self, message: Message) {
        self.app.update(message, &mut self.frontend);
    }

    #[wasm_bindgen(js_name = openPhoto)]
    pub fn open_photo(&mut self, index: usize) {
        self.pending_exit = None;
        self.dispatch(Message::Modal(ModalMessage::Open(index)));
    }

    /// Toggle a category by key (`impresion`, `caja_usb`, ...).
    pub fn toggle(&mut self, category: &str) -> Result<(), JsValue> {
        let category = parse_category(category)?;
        self.dispatch(Message::Modal(ModalMessage::Toggle(category)));
        Ok(())
    }

    /// Save button: commit the staged flags and close.
    pub fn save(&mut self) {
        self.dispatch(Message::Modal(ModalMessage::Save));
    }

    /// Navigate with a blocking `window.confirm` prompt.
    pub fn navigate(&mut self, direction: &str) -> Result<String, JsValue> {
        let direction = parse_direction(direction)?;
        Ok(outcome_name(self.app.navigate(direction, &mut self.frontend)).to_string())
    }

    /// Close with a blocking `window.confirm` prompt.
    pub fn close(&mut self) -> String {
        outcome_name(self.app.close_modal(&mut self.frontend)).to_string()
    }

    /// Start closing without blocking.
    ///
    /// Returns `"confirm"` when the page must ask the user and then call
    /// [`Self::resolve_exit`]; otherwise the exit is already done and the
    /// outcome is returned.
    #[wasm_bindgen(js_name = requestClose)]
    pub fn request_close(&mut self) -> String {
        self.request(ExitIntent::Close)
    }

    /// Start navigating without blocking. See [`Self::request_close`].
    #[wasm_bindgen(js_name = requestNavigate)]
    pub fn request_navigate(&mut self, direction: &str) -> Result<String, JsValue> {
        let direction = parse_direction(direction)?;
        Ok(self.request(ExitIntent::Navigate(direction)))
    }

    fn request(&mut self, intent: ExitIntent) -> String {
        match self.app.request_exit(intent) {
            ExitStep::Confirm(pending) => {
                self.pending_exit = Some(pending);
                "confirm".to_string()
            }
            ExitStep::Proceed(intent) => {
                outcome_name(self.app.proceed_exit(intent, &mut self.frontend)).to_string()
            }
            ExitStep::Inactive => outcome_name(ExitOutcome::Inactive).to_string(),
        }
    }

    /// Prompt text for the pending exit, if any.
    #[wasm_bindgen(js_name = pendingPrompt)]
    pub fn pending_prompt(&self) -> Option<String> {
        self.pending_exit.map(|pending| {
            let kind = match pending.intent() {
                ExitIntent::Navigate(_) => ConfirmKind::SaveBeforeNavigate,
                ExitIntent::Close => ConfirmKind::SaveBeforeClose,
            };
            kind.message().to_string()
        })
    }

    /// Resume a pending exit with `accept`, `decline` or `abort`.
    #[wasm_bindgen(js_name = resolveExit)]
    pub fn resolve_exit(&mut self, choice: &str) -> Result<String, JsValue> {
        let choice = match choice {
            "accept" => ConfirmChoice::Accept,
            "decline" => ConfirmChoice::Decline,
            "abort" => ConfirmChoice::Abort,
            other => return Err(JsValue::from_str(&format!("unknown choice '{}'", other))),
        };
        let Some(pending) = self.pending_exit.take() else {
            return Ok(outcome_name(ExitOutcome::Inactive).to_string());
        };
        Ok(outcome_name(self.app.resume_exit(pending, choice, &mut self.frontend)).to_string())
    }

    /// Apply a filter by button slug.
    #[wasm_bindgen(js_name = setFilter)]
    pub fn set_filter(&mut self, slug: &str) -> Result<(), JsValue> {
        let filter = Filter::from_slug(slug)
            .ok_or_else(|| JsValue::from_str(&format!("unknown filter '{}'", slug)))?;
        self.dispatch(Message::SetFilter(filter));
        Ok(())
    }

    /// Forward a `KeyboardEvent.key`. Returns whether the key was handled.
    pub fn key(&mut self, key: &str) -> bool {
        let Some(key) = Key::from_dom_key(key) else {
            return false;
        };
        let handled = self.app.modal().is_open()
            && self.app.config().keybindings.action_for_key(key).is_some();
        self.dispatch(Message::KeyPressed(key));
        handled
    }

    #[wasm_bindgen(js_name = addVideoNote)]
    pub fn add_video_note(&mut self, minute: String, change: String) {
        self.dispatch(Message::Feedback(FeedbackMessage::AddVideo { minute, change }));
    }

    #[wasm_bindgen(js_name = addPhotoNote)]
    pub fn add_photo_note(&mut self, number: String, change: String) {
        self.dispatch(Message::Feedback(FeedbackMessage::AddPhoto { number, change }));
    }

    /// Remove a note from `video` or `photos`.
    #[wasm_bindgen(js_name = removeNote)]
    pub fn remove_note(&mut self, list: &str, index: usize) -> Result<(), JsValue> {
        let list = parse_list(list)?;
        self.dispatch(Message::Feedback(FeedbackMessage::Remove(list, index)));
        Ok(())
    }

    #[wasm_bindgen(js_name = exportReport)]
    pub fn export_report(&mut self) {
        self.dispatch(Message::Library(LibraryMessage::Export));
    }

    #[wasm_bindgen(js_name = copySummary)]
    pub fn copy_summary(&mut self) {
        self.dispatch(Message::Library(LibraryMessage::CopySummary));
    }

    #[wasm_bindgen(js_name = textSummary)]
    pub fn text_summary(&self) -> String {
        self.app.text_summary()
    }

    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self) {
        self.dispatch(Message::Library(LibraryMessage::ClearAll));
    }

    /// `visibilitychange` to hidden.
    #[wasm_bindgen(js_name = pageHidden)]
    pub fn page_hidden(&mut self) {
        self.dispatch(Message::Library(LibraryMessage::PageHidden));
    }

    /// `beforeunload`.
    pub fn unload(&mut self) {
        self.dispatch(Message::Library(LibraryMessage::Unload));
    }

    /// Whether the open photo has unsaved changes.
    #[wasm_bindgen(js_name = hasUnsavedChanges)]
    pub fn has_unsaved_changes(&self) -> bool {
        self.app.has_unsaved_changes()
    }

    /// Redraw everything.
    pub fn refresh(&mut self) {
        self.app.render_all(&mut self.frontend);
    }
}
