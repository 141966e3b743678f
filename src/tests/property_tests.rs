//! Invariants checked exhaustively over small inputs.

use super::support::{RecordingFrontend, app_with};
use crate::model::{Category, CategoryAssignment};
use crate::state::{
    ConfirmChoice, Direction, Filter, ModalSession, SelectionStore, compute_stats,
    find_nearest_visible, visible_indices,
};

/// One assignment per subset of categories, flags set in category order.
fn all_raw_assignments() -> Vec<CategoryAssignment> {
    (0u8..32)
        .map(|bits| {
            let mut assignment = CategoryAssignment::new();
            for (i, category) in Category::ALL.into_iter().enumerate() {
                if bits & (1 << i) != 0 {
                    assignment.set(category, true);
                }
            }
            assignment
        })
        .collect()
}

/// Small deterministic generator so the sequences are reproducible.
struct Lcg(u64);

impl Lcg {
    fn below(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

fn exclusive(assignment: &CategoryAssignment) -> bool {
    !assignment.descartada || assignment.count() == 1
}

#[test]
fn test_all_false_commit_equals_absence() {
    for index in 0..6 {
        let mut committed = SelectionStore::new();
        committed.commit(index, CategoryAssignment::with(&[Category::CajaFotos]));
        committed.commit(index, CategoryAssignment::new());

        assert!(committed.get(index).is_none());
        assert_eq!(committed, SelectionStore::new());
        assert_eq!(compute_stats(&committed, 6).unclassified, 6);
    }
}

#[test]
fn test_toggle_sequences_keep_descartada_exclusive() {
    let categories = Category::ALL;
    for len in 1..=4u32 {
        for code in 0..categories.len().pow(len) {
            let mut modal = ModalSession::new();
            modal.open(0, CategoryAssignment::new());

            let mut rest = code;
            for _ in 0..len {
                modal.toggle(categories[rest % categories.len()]);
                rest /= categories.len();

                let staged = modal.staged().unwrap();
                assert!(exclusive(&staged), "sequence {code} broke exclusivity: {staged:?}");
            }
        }
    }
}

#[test]
fn test_toggle_from_any_stored_state_stays_exclusive() {
    for start in all_raw_assignments() {
        let start = start.normalized();
        assert!(exclusive(&start));
        for category in Category::ALL {
            let mut modal = ModalSession::new();
            modal.open(0, start);
            modal.toggle(category);
            assert!(exclusive(&modal.staged().unwrap()));
        }
    }
}

#[test]
fn test_unclassified_plus_classified_is_catalog_size() {
    const SIZE: usize = 12;
    let mut rng = Lcg(7);
    let raw = all_raw_assignments();
    let mut selections = SelectionStore::new();

    for _ in 0..500 {
        let index = rng.below(SIZE);
        let assignment = raw[rng.below(raw.len())].normalized();
        selections.commit(index, assignment);

        let stats = compute_stats(&selections, SIZE);
        let classified = (0..SIZE).filter(|&i| selections.is_classified(i)).count();
        assert_eq!(stats.unclassified + classified, SIZE);
        assert_eq!(
            stats.unclassified,
            visible_indices(Filter::Unclassified, &selections, SIZE).len()
        );
    }
}

#[test]
fn test_saving_twice_is_idempotent() {
    let mut app = app_with(4);
    let mut ui = RecordingFrontend::default();

    app.open_photo(1, &mut ui);
    app.toggle_category(Category::Impresion, &mut ui);
    app.toggle_category(Category::CajaUsb, &mut ui);
    app.save_selection(&mut ui);
    let once = (app.selections().clone(), app.store().clone());

    app.save_selection(&mut ui);
    assert_eq!(app.selections(), &once.0);
    let reloaded = super::support::app_from_store(4, app.store().clone());
    let reloaded_once = super::support::app_from_store(4, once.1);
    assert_eq!(reloaded.selections(), reloaded_once.selections());
    assert!(!app.has_unsaved_changes());
}

#[test]
fn test_navigation_round_trip_and_boundaries() {
    const SIZE: usize = 10;
    let mut rng = Lcg(42);
    let raw = all_raw_assignments();
    let mut selections = SelectionStore::new();
    for index in 0..SIZE {
        if rng.below(3) > 0 {
            selections.commit(index, raw[rng.below(raw.len())].normalized());
        }
    }

    for filter in Filter::all() {
        let visible = visible_indices(filter, &selections, SIZE);
        for pair in visible.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(
                find_nearest_visible(a, Direction::Next, filter, &selections, SIZE),
                Some(b)
            );
            assert_eq!(
                find_nearest_visible(b, Direction::Prev, filter, &selections, SIZE),
                Some(a)
            );
        }
        if let (Some(&first), Some(&last)) = (visible.first(), visible.last()) {
            assert_eq!(
                find_nearest_visible(last, Direction::Next, filter, &selections, SIZE),
                None
            );
            assert_eq!(
                find_nearest_visible(first, Direction::Prev, filter, &selections, SIZE),
                None
            );
        }
    }
}

#[test]
fn test_any_exit_answer_leaves_consistent_state() {
    for choice in [ConfirmChoice::Accept, ConfirmChoice::Decline, ConfirmChoice::Abort] {
        for category in Category::ALL {
            let mut app = app_with(3);
            let mut ui = RecordingFrontend::answering(&[choice]);
            app.open_photo(1, &mut ui);
            app.toggle_category(category, &mut ui);
            app.close_modal(&mut ui);

            let committed = app.selections().assignment(1);
            match choice {
                ConfirmChoice::Accept => {
                    assert!(!app.modal().is_open());
                    assert!(committed.get(category));
                }
                ConfirmChoice::Decline => {
                    assert!(!app.modal().is_open());
                    assert!(committed.is_empty());
                }
                ConfirmChoice::Abort => {
                    assert!(app.modal().is_open());
                    assert!(committed.is_empty());
                    assert!(app.has_unsaved_changes());
                }
            }
        }
    }
}
