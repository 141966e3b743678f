//! Committed per-photo category assignments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Category, CategoryAssignment};
use crate::storage::{self, KeyValueStore, StorageError};

/// Sparse map from catalog index to its committed assignment.
///
/// Only photos with at least one flag set are stored; an absent key and an
/// all-false assignment are the same observable state (unclassified).
///
/// Persisted as a JSON object keyed by the index as a string:
/// `{"12": {"impresion": true, "caja_usb": false, ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionStore {
    entries: BTreeMap<usize, CategoryAssignment>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted store under `key`.
    ///
    /// Missing or unreadable data yields an empty store; the failure is only
    /// logged. Records outside the catalog or with no flag set are dropped.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str, catalog_size: usize) -> Self {
        match storage::load_json::<Self, S>(store, key) {
            Ok(Some(loaded)) => {
                let selections = loaded.sanitized(catalog_size);
                log::info!("Loaded {} photo selections", selections.len());
                selections
            }
            Ok(None) => {
                log::debug!("No saved selections found");
                Self::new()
            }
            Err(e) => {
                log::error!("Failed to load selections, starting empty: {}", e);
                Self::new()
            }
        }
    }

    /// Serialize the full mapping under `key`. An empty mapping removes the key.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S, key: &str) -> Result<(), StorageError> {
        if self.is_empty() {
            store.remove_item(key)?;
            log::debug!("Removed stored selections");
            return Ok(());
        }
        storage::save_json(store, key, self)?;
        log::debug!("Saved {} photo selections", self.len());
        Ok(())
    }

    fn sanitized(self, catalog_size: usize) -> Self {
        let before = self.entries.len();
        let entries: BTreeMap<_, _> = self
            .entries
            .into_iter()
            .filter(|(index, assignment)| *index < catalog_size && !assignment.is_empty())
            .map(|(index, assignment)| (index, assignment.normalized()))
            .collect();
        if entries.len() != before {
            log::warn!(
                "Dropped {} stored selections that were empty or outside the catalog",
                before - entries.len()
            );
        }
        Self { entries }
    }

    /// Upsert `assignment` for `index`, or remove the entry if no flag is set.
    pub fn commit(&mut self, index: usize, assignment: CategoryAssignment) {
        if assignment.is_empty() {
            if self.entries.remove(&index).is_some() {
                log::debug!("Photo {} is now unclassified", index + 1);
            }
        } else {
            self.entries.insert(index, assignment);
            log::debug!(
                "Photo {} committed: {:?}",
                index + 1,
                assignment.categories().collect::<Vec<_>>()
            );
        }
    }

    /// Committed assignment for `index`, if classified.
    pub fn get(&self, index: usize) -> Option<&CategoryAssignment> {
        self.entries.get(&index)
    }

    /// Committed assignment for `index`, empty if unclassified.
    pub fn assignment(&self, index: usize) -> CategoryAssignment {
        self.entries.get(&index).copied().unwrap_or_default()
    }

    /// Whether the committed flag for `category` is set on `index`.
    pub fn has(&self, index: usize, category: Category) -> bool {
        self.get(index).is_some_and(|a| a.get(category))
    }

    pub fn is_classified(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of classified photos.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate classified photos in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &CategoryAssignment)> {
        self.entries.iter().map(|(&index, assignment)| (index, assignment))
    }

    /// Indices holding `category`, in index order.
    pub fn indices_with(&self, category: Category) -> impl Iterator<Item = usize> + '_ {
        self.iter()
            .filter(move |(_, a)| a.get(category))
            .map(|(index, _)| index)
    }
}
