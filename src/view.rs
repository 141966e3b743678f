//! View models handed to the render hooks.
//!
//! These are plain data; building DOM (or any other presentation) from them
//! is the frontend's job.

use serde::Serialize;

use crate::model::{Catalog, Category, CategoryAssignment, display_number};
use crate::state::{Filter, SelectionStore, Stats, is_visible};

/// How a gallery card is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardMarker {
    /// Unclassified
    None,
    /// Exactly one non-discard category
    Single(Category),
    /// Two or more non-discard categories
    Multiple,
    /// Discarded
    Discarded,
}

impl CardMarker {
    pub fn for_assignment(assignment: &CategoryAssignment) -> Self {
        if assignment.descartada {
            return CardMarker::Discarded;
        }
        let mut categories = assignment.categories();
        match (categories.next(), categories.next()) {
            (None, _) => CardMarker::None,
            (Some(category), None) => CardMarker::Single(category),
            (Some(_), Some(_)) => CardMarker::Multiple,
        }
    }
}

/// One photo in the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryCard {
    pub index: usize,
    /// 1-based number shown as "Foto N"
    pub number: usize,
    pub path: String,
    /// Shown under the active filter
    pub visible: bool,
    pub marker: CardMarker,
    /// Badge labels in category order
    pub badges: Vec<&'static str>,
}

/// Build every gallery card in catalog order.
pub fn gallery_cards(catalog: &Catalog, selections: &SelectionStore, filter: Filter) -> Vec<GalleryCard> {
    catalog
        .iter()
        .map(|(index, path)| {
            let assignment = selections.assignment(index);
            GalleryCard {
                index,
                number: display_number(index),
                path: path.to_string(),
                visible: is_visible(index, filter, selections),
                marker: CardMarker::for_assignment(&assignment),
                badges: assignment.categories().map(|c| c.badge()).collect(),
            }
        })
        .collect()
}

/// A filter button with its live label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    pub slug: &'static str,
    pub label: String,
    pub active: bool,
}

/// Build all filter buttons.
pub fn filter_buttons(stats: &Stats, catalog_size: usize, active: Filter) -> Vec<FilterButton> {
    Filter::all()
        .into_iter()
        .map(|filter| FilterButton {
            slug: filter.slug(),
            label: filter.label(stats, catalog_size),
            active: filter == active,
        })
        .collect()
}

/// A stat counter, flagged when over its recommended limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub category: Category,
    pub count: usize,
    pub exceeded: bool,
}

/// Counters for every category plus the unclassified total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsView {
    pub cards: Vec<StatCard>,
    pub unclassified: usize,
}

impl StatsView {
    pub fn new(stats: &Stats) -> Self {
        Self {
            cards: Category::ALL
                .into_iter()
                .map(|category| StatCard {
                    category,
                    count: stats.count(category),
                    exceeded: stats.exceeds_limit(category),
                })
                .collect(),
            unclassified: stats.unclassified,
        }
    }
}

/// Contents of the open modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalView {
    pub index: usize,
    pub number: usize,
    pub path: String,
    /// Staged flags (selected option buttons)
    pub staged: CategoryAssignment,
    /// Whether the "previous" control is enabled
    pub has_prev: bool,
    /// Whether the "next" control is enabled
    pub has_next: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::compute_stats;

    #[test]
    fn test_card_markers() {
        assert_eq!(CardMarker::for_assignment(&CategoryAssignment::new()), CardMarker::None);
        assert_eq!(
            CardMarker::for_assignment(&CategoryAssignment::with(&[Category::CajaUsb])),
            CardMarker::Single(Category::CajaUsb)
        );
        assert_eq!(
            CardMarker::for_assignment(&CategoryAssignment::with(&[
                Category::CajaUsb,
                Category::Impresion
            ])),
            CardMarker::Multiple
        );
        assert_eq!(
            CardMarker::for_assignment(&CategoryAssignment::with(&[Category::Descartada])),
            CardMarker::Discarded
        );
    }

    #[test]
    fn test_gallery_cards() {
        let catalog = Catalog::numbered(3);
        let mut selections = SelectionStore::new();
        selections.commit(1, CategoryAssignment::with(&[Category::Impresion, Category::RedesSociales]));

        let cards = gallery_cards(&catalog, &selections, Filter::Unclassified);
        assert_eq!(cards.len(), 3);
        assert!(cards[0].visible);
        assert!(!cards[1].visible);
        assert_eq!(cards[1].number, 2);
        assert_eq!(cards[1].badges, ["📸 Impresión", "📱 Redes Sociales"]);
        assert_eq!(cards[1].marker, CardMarker::Multiple);
        assert!(cards[2].badges.is_empty());
    }

    #[test]
    fn test_filter_buttons_mark_active() {
        let stats = compute_stats(&SelectionStore::new(), 4);
        let buttons = filter_buttons(&stats, 4, Filter::Unclassified);
        assert_eq!(buttons.len(), 7);
        assert_eq!(buttons.iter().filter(|b| b.active).count(), 1);
        assert_eq!(buttons[6].slug, "sin-clasificar");
        assert!(buttons[6].active);
        assert_eq!(buttons[0].label, "Todas (4)");
    }

    #[test]
    fn test_stats_view_exceeded() {
        let stats = Stats {
            caja_fotos: 2,
            ..Default::default()
        };
        let view = StatsView::new(&stats);
        let exceeded: Vec<_> = view
            .cards
            .iter()
            .filter(|c| c.exceeded)
            .map(|c| c.category)
            .collect();
        assert_eq!(exceeded, [Category::CajaFotos]);
    }
}
