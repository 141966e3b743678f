//! Structured selection report for download.
//!
//! The report is what gets sent to the photographer, so its field names are
//! the ones they already read:
//!
//! ```json
//! {
//!   "INSTRUCCIONES": "...",
//!   "whatsapp": "4779203776",
//!   "nombre": "...",
//!   "fecha_evento": "...",
//!   "fecha_exportacion": "2025-10-20T18:04:11.312Z",
//!   "total_fotos": 454,
//!   "estadisticas": { "impresion": 3, ..., "sinClasificar": 450 },
//!   "selecciones": [ { "numero_foto": 3, "archivo": "photos/photo_003.webp", ... } ],
//!   "sugerencias_de_cambios": { "video": "Sin cambios sugeridos", "fotos": [ ... ] }
//! }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::EventInfo;
use crate::constants::NO_FEEDBACK_PLACEHOLDER;
use crate::model::{Catalog, FeedbackLog, PhotoNote, VideoNote, display_number};
use crate::state::{SelectionStore, Stats, compute_stats};

/// One classified photo in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// 1-based photo number
    pub numero_foto: usize,
    /// Photo path
    pub archivo: String,
    pub impresion: bool,
    pub caja_usb: bool,
    pub caja_fotos: bool,
    pub redes_sociales: bool,
    pub descartada: bool,
}

/// A feedback list, or the placeholder string when it is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotesOrPlaceholder<T> {
    Notes(Vec<T>),
    Placeholder(String),
}

impl<T: Clone> NotesOrPlaceholder<T> {
    fn from_notes(notes: &[T]) -> Self {
        if notes.is_empty() {
            Self::Placeholder(NO_FEEDBACK_PLACEHOLDER.to_string())
        } else {
            Self::Notes(notes.to_vec())
        }
    }
}

/// Feedback section of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFeedback {
    pub video: NotesOrPlaceholder<VideoNote>,
    pub fotos: NotesOrPlaceholder<PhotoNote>,
}

/// Complete exported snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "INSTRUCCIONES")]
    pub instructions: String,
    #[serde(rename = "whatsapp")]
    pub contact: String,
    #[serde(rename = "nombre")]
    pub subject_name: String,
    #[serde(rename = "fecha_evento")]
    pub event_date: String,
    /// ISO-8601 export time
    #[serde(rename = "fecha_exportacion")]
    pub exported_at: String,
    #[serde(rename = "total_fotos")]
    pub total_photos: usize,
    #[serde(rename = "estadisticas")]
    pub stats: Stats,
    #[serde(rename = "selecciones")]
    pub selections: Vec<ReportEntry>,
    #[serde(rename = "sugerencias_de_cambios")]
    pub feedback: ReportFeedback,
}

impl Report {
    /// Pretty-printed JSON, as written to the downloaded file.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the report snapshot at time `exported_at`.
pub fn build_report(
    selections: &SelectionStore,
    catalog: &Catalog,
    feedback: &FeedbackLog,
    event: &EventInfo,
    exported_at: DateTime<Utc>,
) -> Report {
    let entries = catalog
        .iter()
        .filter_map(|(index, path)| {
            let assignment = selections.get(index).filter(|a| !a.is_empty())?;
            Some(ReportEntry {
                numero_foto: display_number(index),
                archivo: path.to_string(),
                impresion: assignment.impresion,
                caja_usb: assignment.caja_usb,
                caja_fotos: assignment.caja_fotos,
                redes_sociales: assignment.redes_sociales,
                descartada: assignment.descartada,
            })
        })
        .collect();

    Report {
        instructions: event.instructions(),
        contact: event.contact.clone(),
        subject_name: event.subject_name.clone(),
        event_date: event.event_date.clone(),
        exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        total_photos: catalog.len(),
        stats: compute_stats(selections, catalog.len()),
        selections: entries,
        feedback: ReportFeedback {
            video: NotesOrPlaceholder::from_notes(&feedback.video),
            fotos: NotesOrPlaceholder::from_notes(&feedback.photos),
        },
    }
}

/// Download filename, e.g. `seleccion-valentina-rivera-2025-10-20.json`.
///
/// Uses the first two words of the subject name.
pub fn report_filename(event: &EventInfo, exported_at: DateTime<Utc>) -> String {
    let slug = event
        .subject_name
        .split_whitespace()
        .take(2)
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-");
    let date = exported_at.format("%Y-%m-%d");
    if slug.is_empty() {
        format!("seleccion-{date}.json")
    } else {
        format!("seleccion-{slug}-{date}.json")
    }
}
