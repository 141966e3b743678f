//! The fixed, ordered photo catalog.
//!
//! Photos are identified by their 0-based position in the catalog and shown
//! to users with 1-based numbers.

use crate::constants::catalog;

/// A contiguous, numbered run of photo files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRange {
    /// Path prefix before the number (e.g. `photos/photo_`)
    pub prefix: String,
    /// File suffix after the number (e.g. `.webp`)
    pub suffix: String,
    /// Number of the first file
    pub start: u32,
    /// Number of files in the run
    pub count: usize,
    /// Zero-pad numbers to this width (0 = no padding)
    pub pad: usize,
}

impl CatalogRange {
    pub fn new(prefix: &str, suffix: &str, start: u32, count: usize) -> Self {
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            start,
            count,
            pad: 0,
        }
    }

    /// Zero-pad numbers to `width` digits.
    pub fn padded(mut self, width: usize) -> Self {
        self.pad = width;
        self
    }

    /// Stops early if a number would not fit in `u32`.
    fn paths(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.count)
            .map_while(move |i| u32::try_from(i).ok().and_then(|i| self.start.checked_add(i)))
            .map(move |number| {
                format!(
                    "{}{:0width$}{}",
                    self.prefix,
                    number,
                    self.suffix,
                    width = self.pad
                )
            })
    }
}

/// Immutable list of photo paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    paths: Vec<String>,
}

impl Catalog {
    /// Build a catalog by concatenating ranges in order.
    pub fn from_ranges(ranges: &[CatalogRange]) -> Self {
        let paths: Vec<String> = ranges.iter().flat_map(|r| r.paths()).collect();
        log::debug!("Catalog built from {} ranges: {} photos", ranges.len(), paths.len());
        Self { paths }
    }

    /// Build a catalog from explicit paths.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Catalog with `len` synthetic entries, handy for headless use.
    pub fn numbered(len: usize) -> Self {
        Self::from_ranges(&[CatalogRange::new("photos/photo_", ".webp", 1, len).padded(3)])
    }

    /// The event catalog: 230 session photos followed by 224 event photos.
    pub fn event() -> Self {
        Self::from_ranges(&[
            CatalogRange::new(
                "photos/photo_",
                ".webp",
                catalog::SESSION_START,
                catalog::SESSION_COUNT,
            )
            .padded(catalog::SESSION_PAD),
            CatalogRange::new(
                "photos/evento-",
                ".webp",
                catalog::EVENT_START,
                catalog::EVENT_COUNT,
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Path of the photo at `index`.
    pub fn path(&self, index: usize) -> Option<&str> {
        self.paths.get(index).map(String::as_str)
    }

    /// Whether `index` refers to a photo in the catalog.
    pub fn contains(&self, index: usize) -> bool {
        index < self.paths.len()
    }

    /// Iterate `(index, path)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.paths.iter().map(String::as_str).enumerate()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::event()
    }
}

/// 1-based number shown to users for a catalog index.
pub fn display_number(index: usize) -> usize {
    index + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_catalog_layout() {
        let catalog = Catalog::event();
        assert_eq!(catalog.len(), 454);
        assert_eq!(catalog.path(0), Some("photos/photo_001.webp"));
        assert_eq!(catalog.path(229), Some("photos/photo_230.webp"));
        assert_eq!(catalog.path(230), Some("photos/evento-141.webp"));
        assert_eq!(catalog.path(453), Some("photos/evento-364.webp"));
        assert_eq!(catalog.path(454), None);
    }

    #[test]
    fn test_from_paths() {
        let catalog = Catalog::from_paths(["a.jpg", "b.jpg"]);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(1));
        assert!(!catalog.contains(2));
        assert_eq!(catalog.iter().nth(1), Some((1, "b.jpg")));
    }

    #[test]
    fn test_range_stops_at_numbering_limit() {
        let catalog = Catalog::from_ranges(&[CatalogRange::new("p", ".jpg", u32::MAX - 1, 5)]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.path(0), Some(format!("p{}.jpg", u32::MAX - 1).as_str()));
        assert_eq!(catalog.path(1), Some(format!("p{}.jpg", u32::MAX).as_str()));
    }

    #[test]
    fn test_display_number() {
        assert_eq!(display_number(0), 1);
        assert_eq!(display_number(453), 454);
    }
}
