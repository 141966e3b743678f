//! Aggregate counts derived from the selection store.

use serde::{Deserialize, Serialize};

use crate::model::Category;
use crate::state::SelectionStore;

/// Per-category counts plus the number of unclassified photos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub impresion: usize,
    pub caja_usb: usize,
    pub caja_fotos: usize,
    pub redes_sociales: usize,
    pub descartada: usize,
    #[serde(rename = "sinClasificar")]
    pub unclassified: usize,
}

impl Stats {
    /// Count for a single category.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Impresion => self.impresion,
            Category::CajaUsb => self.caja_usb,
            Category::CajaFotos => self.caja_fotos,
            Category::RedesSociales => self.redes_sociales,
            Category::Descartada => self.descartada,
        }
    }

    fn count_mut(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Impresion => &mut self.impresion,
            Category::CajaUsb => &mut self.caja_usb,
            Category::CajaFotos => &mut self.caja_fotos,
            Category::RedesSociales => &mut self.redes_sociales,
            Category::Descartada => &mut self.descartada,
        }
    }

    /// True when the category is over its recommended limit.
    pub fn exceeds_limit(&self, category: Category) -> bool {
        category
            .limit()
            .is_some_and(|limit| self.count(category) > limit)
    }
}

/// Compute statistics for `selections` over a catalog of `catalog_size` photos.
///
/// `unclassified` is the catalog size minus the number of stored records,
/// which relies on the store never holding an all-false record.
pub fn compute_stats(selections: &SelectionStore, catalog_size: usize) -> Stats {
    let mut stats = Stats::default();
    for (_, assignment) in selections.iter() {
        for category in assignment.categories() {
            *stats.count_mut(category) += 1;
        }
    }
    stats.unclassified = catalog_size.saturating_sub(selections.len());
    stats
}
