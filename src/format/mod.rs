//! Selection export.
//!
//! Two outputs are produced from the same state:
//!
//! - **Report**: a JSON snapshot downloaded as a file and sent to the
//!   photographer.
//! - **Summary**: a plain-text digest copied to the clipboard for messaging.
//!
//! Both are pure functions of the selection store, catalog and feedback log;
//! timestamps are passed in so output is reproducible.

mod report;
mod summary;

pub use report::{
    NotesOrPlaceholder, Report, ReportEntry, ReportFeedback, build_report, report_filename,
};
pub use summary::build_text_summary;
