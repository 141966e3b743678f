//! Change suggestions for the event video and individual photos.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A suggested change at a point in the event video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoNote {
    /// Free-form timestamp label (e.g. "2:35")
    pub minute: String,
    /// Requested change
    pub change: String,
}

/// A suggested change to one photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoNote {
    /// 1-based photo number
    #[serde(rename = "photoNumber")]
    pub photo_number: usize,
    /// Requested change
    pub change: String,
}

/// Which feedback list an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackList {
    Video,
    Photos,
}

/// Rejected feedback input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// A required field was blank
    #[error("Por favor completa ambos campos")]
    EmptyField,

    /// Photo number outside `[1, max]`
    #[error("El número de foto debe estar entre 1 y {max}")]
    PhotoNumberOutOfRange {
        /// The rejected number
        number: i64,
        /// Catalog size
        max: usize,
    },

    /// Photo number is not an integer
    #[error("Número de foto inválido: {0}")]
    InvalidPhotoNumber(String),

    /// Removal index past the end of the list
    #[error("No existe la sugerencia {index}")]
    NoSuchEntry {
        /// The rejected position
        index: usize,
    },
}

/// Both feedback lists, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackLog {
    #[serde(default)]
    pub video: Vec<VideoNote>,
    #[serde(default)]
    pub photos: Vec<PhotoNote>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a video note. Both fields are trimmed and must be non-empty.
    pub fn add_video(&mut self, minute: &str, change: &str) -> Result<&VideoNote, FeedbackError> {
        let minute = minute.trim();
        let change = change.trim();
        if minute.is_empty() || change.is_empty() {
            return Err(FeedbackError::EmptyField);
        }

        self.video.push(VideoNote {
            minute: minute.to_string(),
            change: change.to_string(),
        });
        log::debug!("📝 Video note added at {}", minute);
        Ok(&self.video[self.video.len() - 1])
    }

    /// Append a photo note.
    ///
    /// `number` is the raw user input; it must parse as an integer in
    /// `[1, catalog_size]`.
    pub fn add_photo(
        &mut self,
        number: &str,
        change: &str,
        catalog_size: usize,
    ) -> Result<&PhotoNote, FeedbackError> {
        let number = number.trim();
        let change = change.trim();
        if number.is_empty() || change.is_empty() {
            return Err(FeedbackError::EmptyField);
        }

        let parsed: i64 = number
            .parse()
            .map_err(|_| FeedbackError::InvalidPhotoNumber(number.to_string()))?;
        let photo_number = validate_photo_number(parsed, catalog_size)?;

        self.photos.push(PhotoNote {
            photo_number,
            change: change.to_string(),
        });
        log::debug!("📝 Photo note added for #{}", photo_number);
        Ok(&self.photos[self.photos.len() - 1])
    }

    /// Remove the entry at `index` from `list`.
    pub fn remove(&mut self, list: FeedbackList, index: usize) -> Result<(), FeedbackError> {
        let len = match list {
            FeedbackList::Video => self.video.len(),
            FeedbackList::Photos => self.photos.len(),
        };
        if index >= len {
            return Err(FeedbackError::NoSuchEntry { index });
        }

        match list {
            FeedbackList::Video => {
                self.video.remove(index);
            }
            FeedbackList::Photos => {
                self.photos.remove(index);
            }
        }
        log::debug!("🗑️ Removed {:?} note {}", list, index);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.video.is_empty() && self.photos.is_empty()
    }
}

fn validate_photo_number(number: i64, catalog_size: usize) -> Result<usize, FeedbackError> {
    usize::try_from(number)
        .ok()
        .filter(|n| (1..=catalog_size).contains(n))
        .ok_or(FeedbackError::PhotoNumberOutOfRange {
            number,
            max: catalog_size,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_video_trims() {
        let mut log = FeedbackLog::new();
        let note = log.add_video("  2:35 ", " quitar el logo ").unwrap();
        assert_eq!(note.minute, "2:35");
        assert_eq!(note.change, "quitar el logo");
        assert_eq!(log.video.len(), 1);
    }

    #[test]
    fn test_add_video_rejects_blank() {
        let mut log = FeedbackLog::new();
        assert_eq!(log.add_video("", "x"), Err(FeedbackError::EmptyField));
        assert_eq!(log.add_video("1:00", "   "), Err(FeedbackError::EmptyField));
        assert!(log.is_empty());
    }

    #[test]
    fn test_add_photo_range() {
        let mut log = FeedbackLog::new();
        assert_eq!(
            log.add_photo("0", "x", 5),
            Err(FeedbackError::PhotoNumberOutOfRange { number: 0, max: 5 })
        );
        assert_eq!(
            log.add_photo("6", "x", 5),
            Err(FeedbackError::PhotoNumberOutOfRange { number: 6, max: 5 })
        );
        assert_eq!(
            log.add_photo("-1", "x", 5),
            Err(FeedbackError::PhotoNumberOutOfRange { number: -1, max: 5 })
        );
        assert!(matches!(
            log.add_photo("tres", "x", 5),
            Err(FeedbackError::InvalidPhotoNumber(_))
        ));
        assert!(log.photos.is_empty());

        assert_eq!(log.add_photo("5", "más brillo", 5).unwrap().photo_number, 5);
        assert_eq!(log.add_photo("1", "recortar", 5).unwrap().photo_number, 1);
        assert_eq!(log.photos.len(), 2);
    }

    #[test]
    fn test_remove_by_position() {
        let mut log = FeedbackLog::new();
        log.add_video("0:10", "a").unwrap();
        log.add_video("0:20", "b").unwrap();
        log.add_video("0:30", "c").unwrap();

        log.remove(FeedbackList::Video, 1).unwrap();
        let minutes: Vec<_> = log.video.iter().map(|n| n.minute.as_str()).collect();
        assert_eq!(minutes, ["0:10", "0:30"]);

        assert_eq!(
            log.remove(FeedbackList::Photos, 0),
            Err(FeedbackError::NoSuchEntry { index: 0 })
        );
    }

    #[test]
    fn test_persisted_layout() {
        let mut log = FeedbackLog::new();
        log.add_video("1:00", "a").unwrap();
        log.add_photo("3", "b", 10).unwrap();

        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "video": [{"minute": "1:00", "change": "a"}],
                "photos": [{"photoNumber": 3, "change": "b"}]
            })
        );
    }
}
