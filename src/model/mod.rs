//! Data models for the photo selector.

mod catalog;
mod category;
mod feedback;

pub use catalog::{Catalog, CatalogRange, display_number};
pub use category::{Category, CategoryAssignment};
pub use feedback::{FeedbackError, FeedbackList, FeedbackLog, PhotoNote, VideoNote};
