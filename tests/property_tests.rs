//! Property tests for deck invariants.
//!
//! Decks are built from seeded `GameRng`s so failures shrink to a
//! reproducible seed.

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use deck_randomizer::cards::Card;
use deck_randomizer::core::GameRng;
use deck_randomizer::deck::{CardAction, DeckEngine, Notice};

fn pool(size: usize) -> Vec<Card> {
    (0..size)
        .map(|i| {
            let card_type = if i % 3 == 0 { "Villain" } else { "Hero" };
            Card::new(format!("Card {i}"), card_type, format!("{i}.jpg"), "Base")
        })
        .collect()
}

fn sorted_names(engine: &DeckEngine) -> Vec<String> {
    let mut names: Vec<_> = engine.deck().iter().map(|c| c.name.clone()).collect();
    names.sort();
    names
}

/// A cursor walk: true = advance, false = retreat.
fn steps() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..40)
}

proptest! {
    #[test]
    fn build_is_a_permutation(seed in any::<u64>(), size in 1usize..30) {
        let cards = pool(size);
        let mut engine = DeckEngine::new(GameRng::new(seed));

        let len = engine.build(&cards, |_| true).unwrap();
        prop_assert_eq!(len, size);
        prop_assert_eq!(engine.cursor(), -1);

        let mut expected: Vec<_> = cards.iter().map(|c| c.name.clone()).collect();
        expected.sort();
        prop_assert_eq!(sorted_names(&engine), expected);
    }

    #[test]
    fn cursor_stays_in_bounds(seed in any::<u64>(), size in 1usize..10, walk in steps()) {
        let mut engine = DeckEngine::new(GameRng::new(seed));
        engine.build(&pool(size), |_| true).unwrap();

        for forward in walk {
            if forward { engine.advance(); } else { engine.retreat(); }
            prop_assert!(engine.cursor() >= -1);
            prop_assert!(engine.cursor() < size as isize);
        }
    }

    #[test]
    fn reinsert_anywhere_keeps_cards_and_moves_later(
        seed in any::<u64>(),
        size in 2usize..20,
        at in 0usize..20,
    ) {
        let cards = pool(size);
        let mut engine = DeckEngine::new(GameRng::new(seed));
        engine.build(&cards, |_| true).unwrap();

        let at = at % size;
        for _ in 0..=at {
            engine.advance();
        }
        let before = sorted_names(&engine);
        let moved = engine.active_card().unwrap().name.clone();

        engine.apply(CardAction::ShuffleAnywhere, &[]).unwrap();

        prop_assert_eq!(engine.len(), size);
        prop_assert_eq!(sorted_names(&engine), before);
        prop_assert_eq!(engine.cursor(), at as isize - 1);

        let new_index = engine.deck().iter().position(|c| c.name == moved).unwrap();
        if at + 1 < size {
            prop_assert!(new_index > at);
        } else {
            prop_assert_eq!(new_index, at);
        }
    }

    #[test]
    fn reinsert_within_next_lands_in_window(
        seed in any::<u64>(),
        size in 2usize..20,
        at in 0usize..20,
        n in 1usize..25,
    ) {
        let mut engine = DeckEngine::new(GameRng::new(seed));
        engine.build(&pool(size), |_| true).unwrap();

        let at = at % size;
        for _ in 0..=at {
            engine.advance();
        }
        let moved = engine.active_card().unwrap().name.clone();
        let remaining = size - at - 1;

        let report = engine.apply(CardAction::ShuffleWithinNext(n), &[]).unwrap();

        if remaining == 0 {
            prop_assert_eq!(report.notices(), &[Notice::NothingToShuffleInto][..]);
            prop_assert_eq!(engine.cursor(), at as isize);
        } else {
            let window = n.min(remaining);
            prop_assert_eq!(report.contains(Notice::OnlyRemaining(remaining)), n > remaining);
            prop_assert!(report.contains(Notice::ShuffledWithinNext(window)));

            let new_index = engine.deck().iter().position(|c| c.name == moved).unwrap();
            prop_assert!(new_index > at && new_index <= at + window);
            prop_assert_eq!(engine.cursor(), at as isize - 1);
        }
        prop_assert_eq!(engine.len(), size);
    }

    #[test]
    fn replace_never_duplicates(seed in any::<u64>(), deck_size in 1usize..12, extra in 0usize..8) {
        let all = pool(deck_size + extra);
        let mut engine = DeckEngine::new(GameRng::new(seed));
        engine.build(&all[..deck_size], |_| true).unwrap();
        engine.advance();
        let before: Vec<_> = engine.deck().iter().cloned().collect();

        let report = engine.apply(CardAction::ReplaceSameType, &all).unwrap();

        let mut names: Vec<_> = engine.deck().iter().map(|c| (c.name.clone(), c.image.clone())).collect();
        let len = names.len();
        names.sort();
        names.dedup();
        prop_assert_eq!(names.len(), len);
        prop_assert_eq!(engine.cursor(), 0);

        if report.contains(Notice::NoUnseenCandidates) {
            let after: Vec<_> = engine.deck().iter().cloned().collect();
            prop_assert_eq!(after, before);
        } else {
            prop_assert_eq!(&engine.deck()[0].card_type, &before[0].card_type);
        }
    }
}

/// Every ordering of three cards shows up with roughly equal frequency.
#[test]
fn shuffle_is_uniform_over_permutations() {
    let cards = pool(3);
    let mut engine = DeckEngine::new(GameRng::new(2024));
    let trials = 60_000;

    let mut counts: FxHashMap<Vec<String>, usize> = FxHashMap::default();
    for _ in 0..trials {
        engine.build(&cards, |_| true).unwrap();
        let order = engine.deck().iter().map(|c| c.name.clone()).collect();
        *counts.entry(order).or_default() += 1;
    }

    assert_eq!(counts.len(), 6);
    let expected = trials as f64 / 6.0;
    for (order, count) in counts {
        let deviation = (count as f64 - expected).abs() / expected;
        assert!(deviation < 0.05, "{order:?} seen {count} times");
    }
}
