//! Fotosel - event photo selection
//!
//! Lets a client classify every photo of an event into delivery categories
//! (print, USB box, photo box, social media, discard), leave change requests,
//! and export the result as a JSON report or a text summary. Runs in the
//! browser with `localStorage` persistence, or natively against files.

mod app;
pub mod config;
pub mod constants;
pub mod format;
pub mod frontend;
mod handlers;
pub mod keybindings;
pub mod message;
pub mod model;
pub mod state;
pub mod storage;
pub mod view;

#[cfg(test)]
mod tests;

pub use app::{ExitOutcome, SelectorApp};
pub use config::AppConfig;
pub use frontend::{ConfirmKind, Frontend, NotificationLevel};
pub use handlers::FeedbackChange;
pub use message::Message;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
