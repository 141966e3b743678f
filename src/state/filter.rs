//! Gallery filters and filtered navigation.

use serde::{Deserialize, Serialize};

use crate::model::Category;
use crate::state::{SelectionStore, Stats};

/// Which photos the gallery shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Filter {
    /// Every photo
    #[default]
    All,
    /// Photos with the given committed flag
    Category(Category),
    /// Photos with no committed flag
    Unclassified,
}

impl Filter {
    /// Every filter in button order.
    pub fn all() -> [Filter; 7] {
        [
            Filter::All,
            Filter::Category(Category::Impresion),
            Filter::Category(Category::CajaUsb),
            Filter::Category(Category::CajaFotos),
            Filter::Category(Category::RedesSociales),
            Filter::Category(Category::Descartada),
            Filter::Unclassified,
        ]
    }

    /// Slug used by the filter buttons.
    pub fn slug(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Category(category) => category.slug(),
            Filter::Unclassified => "sin-clasificar",
        }
    }

    /// Parse a filter button slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().into_iter().find(|f| f.slug() == slug)
    }

    /// Button label with the current count, e.g. `Impresión (12/100)`.
    pub fn label(&self, stats: &Stats, catalog_size: usize) -> String {
        match self {
            Filter::All => format!("Todas ({catalog_size})"),
            Filter::Category(category) => {
                let count = stats.count(*category);
                match category.limit() {
                    Some(limit) => format!("{} ({count}/{limit})", category.label()),
                    None => format!("{} ({count})", category.label()),
                }
            }
            Filter::Unclassified => format!("Sin Clasificar ({})", stats.unclassified),
        }
    }
}

/// Direction of modal navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Next,
    Prev,
}

/// Whether the photo at `index` is shown under `filter`.
pub fn is_visible(index: usize, filter: Filter, selections: &SelectionStore) -> bool {
    match filter {
        Filter::All => true,
        Filter::Category(category) => selections.has(index, category),
        Filter::Unclassified => selections
            .get(index)
            .is_none_or(|assignment| assignment.is_empty()),
    }
}

/// Nearest index strictly after (`Next`) or before (`Prev`) `start` that is
/// visible under `filter`. Never wraps around.
pub fn find_nearest_visible(
    start: usize,
    direction: Direction,
    filter: Filter,
    selections: &SelectionStore,
    catalog_size: usize,
) -> Option<usize> {
    let visible = |i: &usize| is_visible(*i, filter, selections);
    match direction {
        Direction::Next => (start.saturating_add(1)..catalog_size).find(visible),
        Direction::Prev => (0..start.min(catalog_size)).rev().find(visible),
    }
}

/// All indices visible under `filter`, in catalog order.
pub fn visible_indices(filter: Filter, selections: &SelectionStore, catalog_size: usize) -> Vec<usize> {
    (0..catalog_size)
        .filter(|&i| is_visible(i, filter, selections))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryAssignment;
    use crate::state::compute_stats;

    fn sample() -> SelectionStore {
        let mut selections = SelectionStore::new();
        selections.commit(1, CategoryAssignment::with(&[Category::Impresion]));
        selections.commit(4, CategoryAssignment::with(&[Category::Impresion, Category::CajaUsb]));
        selections.commit(6, CategoryAssignment::with(&[Category::Descartada]));
        selections
    }

    #[test]
    fn test_slug_roundtrip() {
        for filter in Filter::all() {
            assert_eq!(Filter::from_slug(filter.slug()), Some(filter));
        }
        assert_eq!(Filter::from_slug("caja_usb"), None);
    }

    #[test]
    fn test_visibility() {
        let selections = sample();
        assert!(is_visible(0, Filter::All, &selections));
        assert!(is_visible(4, Filter::Category(Category::CajaUsb), &selections));
        assert!(!is_visible(1, Filter::Category(Category::CajaUsb), &selections));
        assert!(is_visible(0, Filter::Unclassified, &selections));
        assert!(!is_visible(6, Filter::Unclassified, &selections));
    }

    #[test]
    fn test_visible_indices() {
        let selections = sample();
        assert_eq!(
            visible_indices(Filter::Category(Category::Impresion), &selections, 8),
            [1, 4]
        );
        assert_eq!(
            visible_indices(Filter::Unclassified, &selections, 8),
            [0, 2, 3, 5, 7]
        );
    }

    #[test]
    fn test_nearest_visible_skips_hidden() {
        let selections = sample();
        let print = Filter::Category(Category::Impresion);
        assert_eq!(find_nearest_visible(1, Direction::Next, print, &selections, 8), Some(4));
        assert_eq!(find_nearest_visible(4, Direction::Prev, print, &selections, 8), Some(1));
        // Start need not be visible itself
        assert_eq!(find_nearest_visible(2, Direction::Next, print, &selections, 8), Some(4));
    }

    #[test]
    fn test_nearest_visible_does_not_wrap() {
        let selections = sample();
        let print = Filter::Category(Category::Impresion);
        assert_eq!(find_nearest_visible(4, Direction::Next, print, &selections, 8), None);
        assert_eq!(find_nearest_visible(1, Direction::Prev, print, &selections, 8), None);
        assert_eq!(find_nearest_visible(0, Direction::Prev, Filter::All, &selections, 8), None);
        assert_eq!(find_nearest_visible(7, Direction::Next, Filter::All, &selections, 8), None);
    }

    #[test]
    fn test_round_trip_between_neighbours() {
        let selections = sample();
        for filter in Filter::all() {
            let visible = visible_indices(filter, &selections, 8);
            for pair in visible.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert_eq!(
                    find_nearest_visible(a, Direction::Next, filter, &selections, 8),
                    Some(b)
                );
                assert_eq!(
                    find_nearest_visible(b, Direction::Prev, filter, &selections, 8),
                    Some(a)
                );
            }
            if let (Some(&first), Some(&last)) = (visible.first(), visible.last()) {
                assert_eq!(find_nearest_visible(first, Direction::Prev, filter, &selections, 8), None);
                assert_eq!(find_nearest_visible(last, Direction::Next, filter, &selections, 8), None);
            }
        }
    }

    #[test]
    fn test_labels() {
        let selections = sample();
        let stats = compute_stats(&selections, 8);
        assert_eq!(Filter::All.label(&stats, 8), "Todas (8)");
        assert_eq!(
            Filter::Category(Category::Impresion).label(&stats, 8),
            "Impresión (2/100)"
        );
        assert_eq!(
            Filter::Category(Category::CajaUsb).label(&stats, 8),
            "Caja USB (1/1)"
        );
        assert_eq!(
            Filter::Category(Category::Descartada).label(&stats, 8),
            "Descartadas (1)"
        );
        assert_eq!(Filter::Unclassified.label(&stats, 8), "Sin Clasificar (5)");
    }
}
