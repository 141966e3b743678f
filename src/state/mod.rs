//! Application state management modules.

mod filter;
mod modal;
mod selection;
mod stats;

pub use filter::{Direction, Filter, find_nearest_visible, is_visible, visible_indices};
pub use modal::{
    ConfirmChoice, ExitDecision, ExitIntent, ExitStep, ModalSession, ModalState, PendingExit,
};
pub use selection::SelectionStore;
pub use stats::{Stats, compute_stats};
