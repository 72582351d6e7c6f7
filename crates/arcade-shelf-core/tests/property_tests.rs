//! Property-based tests for the game store and gallery
//!
//! Uses proptest to verify ordering, removal and idempotence invariants.

use arcade_shelf_core::{Confirmation, Gallery, GameForm, GameId, GameStore, GridView};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Non-blank game names (alphanumeric core, optional padding)
fn name_strategy() -> impl Strategy<Value = String> {
    ("[ ]{0,3}", "[a-zA-Z0-9][a-zA-Z0-9 ]{0,30}[a-zA-Z0-9]|[a-zA-Z0-9]", "[ ]{0,3}")
        .prop_map(|(pre, core, post)| format!("{}{}{}", pre, core, post))
}

/// Valid absolute links
fn link_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,10}".prop_map(|path| format!("https://games.test/{}", path))
}

fn form_strategy() -> impl Strategy<Value = GameForm> {
    (name_strategy(), link_strategy()).prop_map(|(name, link)| GameForm::new(name, link, ""))
}

/// Operations that can be performed on a Gallery
#[derive(Debug, Clone)]
enum GalleryOp {
    Submit(GameForm),
    Delete(usize, bool), // Index into existing games, confirmed?
}

fn ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<GalleryOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => form_strategy().prop_map(GalleryOp::Submit),
            1 => (0..50usize, any::<bool>()).prop_map(|(i, yes)| GalleryOp::Delete(i, yes)),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every valid submit adds one game, in submission order, with the name trimmed
    #[test]
    fn submits_preserve_count_and_order(forms in prop::collection::vec(form_strategy(), 0..30)) {
        let mut gallery = Gallery::default();
        for form in &forms {
            prop_assert!(gallery.submit(form).is_ok());
        }

        prop_assert_eq!(gallery.games().len(), forms.len());
        for (game, form) in gallery.games().iter().zip(&forms) {
            prop_assert_eq!(game.name.as_str(), form.name.trim());
        }
    }

    /// Seeded store: length is seeds + appends
    #[test]
    fn seeds_plus_submits(
        seeds in prop::collection::vec(form_strategy(), 0..3),
        forms in prop::collection::vec(form_strategy(), 0..10),
    ) {
        let mut gallery = Gallery::default();
        gallery.initialize(&seeds);
        for form in &forms {
            gallery.submit(form).unwrap();
        }
        prop_assert_eq!(gallery.games().len(), seeds.len() + forms.len());
    }

    /// Removing a present id drops exactly that game
    #[test]
    fn remove_present_drops_exactly_one(
        forms in prop::collection::vec(form_strategy(), 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = GameStore::new();
        store.initialize(&forms);
        let before: Vec<GameId> = store.list().iter().map(|g| g.id).collect();
        let target = before[pick.index(before.len())];

        let removed = store.remove_by_id(target);
        prop_assert_eq!(removed.map(|g| g.id), Some(target));
        prop_assert_eq!(store.len(), before.len() - 1);

        let expected: Vec<GameId> = before.into_iter().filter(|id| *id != target).collect();
        let after: Vec<GameId> = store.list().iter().map(|g| g.id).collect();
        prop_assert_eq!(after, expected);
    }

    /// Removing an absent id leaves the store unchanged
    #[test]
    fn remove_absent_is_noop(forms in prop::collection::vec(form_strategy(), 0..20)) {
        let mut store = GameStore::new();
        store.initialize(&forms);
        let before = store.list().to_vec();

        prop_assert!(store.remove_by_id(GameId::from_raw(-1)).is_none());
        prop_assert_eq!(store.list(), before.as_slice());
    }

    /// initialize twice == initialize once
    #[test]
    fn initialize_is_idempotent(seeds in prop::collection::vec(form_strategy(), 0..5)) {
        let mut once = GameStore::new();
        once.initialize(&seeds);
        let once_names: Vec<String> = once.list().iter().map(|g| g.name.clone()).collect();

        let mut twice = GameStore::new();
        twice.initialize(&seeds);
        let after_first = twice.list().to_vec();
        twice.initialize(&seeds);

        prop_assert_eq!(twice.list(), after_first.as_slice());
        let twice_names: Vec<String> = twice.list().iter().map(|g| g.name.clone()).collect();
        prop_assert_eq!(once_names, twice_names);
    }

    /// Ids issued by next_id are strictly increasing whatever the clock does
    #[test]
    fn next_id_strictly_increasing(clock in prop::collection::vec(0i64..1_000, 1..50)) {
        let mut store = GameStore::new();
        let ids: Vec<GameId> = clock.iter().map(|t| store.next_id_at(*t).unwrap()).collect();
        for pair in ids.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    /// After any op sequence, rendered cards match the store exactly
    #[test]
    fn view_matches_store(ops in ops_strategy(40)) {
        let mut gallery = Gallery::default();

        for op in ops {
            match op {
                GalleryOp::Submit(form) => {
                    gallery.submit(&form).unwrap();
                }
                GalleryOp::Delete(index, yes) => {
                    let len = gallery.games().len();
                    if len > 0 {
                        let id = gallery.games()[index % len].id;
                        let removed = gallery.delete(id, Confirmation::from(yes));
                        prop_assert_eq!(removed, yes);
                        prop_assert_eq!(gallery.games().len(), if yes { len - 1 } else { len });
                    }
                }
            }

            let store_ids: Vec<GameId> = gallery.games().iter().map(|g| g.id).collect();
            let view = gallery.view();
            prop_assert_eq!(view.card_ids(), store_ids.clone());
            prop_assert_eq!(matches!(view, GridView::Empty { .. }), store_ids.is_empty());
        }
    }
}
