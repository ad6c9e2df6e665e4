//! The deck engine: shuffled deck, cursor, and mid-session reordering.
//!
//! ## States
//!
//! - `Empty`: no deck built yet
//! - `Placeholder`: deck built, cursor before the first card
//! - `Active(i)`: card `i` is face up
//!
//! Building a deck always lands on `Placeholder`. The two reinsert actions
//! step the cursor back one slot so the next `advance` shows a card the user
//! has not just seen. Replacement never moves the cursor.
//!
//! Every refused operation leaves deck and cursor untouched.

use im::Vector;
use rustc_hash::FxHashSet;

use super::action::{ActionReport, CardAction, Notice};
use super::view::{DeckState, Face, Progress, Snapshot};
use crate::cards::Card;
use crate::core::error::{DeckError, DeckResult};
use crate::core::rng::{GameRng, RandomSource};

/// Owns the deck and cursor for one session.
///
/// ## Usage
///
/// ```
/// use deck_randomizer::cards::Card;
/// use deck_randomizer::core::GameRng;
/// use deck_randomizer::deck::{DeckEngine, DeckState};
///
/// let cards = vec![
///     Card::new("A", "Hero", "a.jpg", "Base"),
///     Card::new("B", "Hero", "b.jpg", "Base"),
///     Card::new("C", "Villain", "c.jpg", "Base"),
/// ];
///
/// let mut engine = DeckEngine::new(GameRng::new(42));
/// engine.build(&cards, |c| c.card_type == "Hero").unwrap();
/// assert_eq!(engine.state(), DeckState::Placeholder);
///
/// engine.advance();
/// assert_eq!(engine.state(), DeckState::Active(0));
/// ```
#[derive(Clone, Debug)]
pub struct DeckEngine<R = GameRng> {
    deck: Vector<Card>,
    cursor: Option<usize>,
    rng: R,
}

impl Default for DeckEngine<GameRng> {
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

impl<R: RandomSource> DeckEngine<R> {
    /// Create an engine with no deck.
    pub fn new(rng: R) -> Self {
        Self {
            deck: Vector::new(),
            cursor: None,
            rng,
        }
    }

    // === Building ===

    /// Build a fresh deck from the cards matching `predicate`.
    ///
    /// Replaces any previous deck and puts the cursor on the placeholder.
    /// Returns the new deck length.
    pub fn build<F>(&mut self, source: &[Card], predicate: F) -> DeckResult<usize>
    where
        F: Fn(&Card) -> bool,
    {
        let mut cards: Vec<Card> = source.iter().filter(|c| predicate(*c)).cloned().collect();
        if cards.is_empty() {
            return Err(DeckError::EmptySelection);
        }

        shuffle(&mut cards, &mut self.rng);
        self.deck = Vector::from(cards);
        self.cursor = None;

        log::info!("built deck of {} cards", self.deck.len());
        Ok(self.deck.len())
    }

    // === Cursor ===

    /// Move to the next card. No-op on the last card.
    pub fn advance(&mut self) -> bool {
        let next = self.cursor.map_or(0, |i| i + 1);
        if next < self.deck.len() {
            self.cursor = Some(next);
            true
        } else {
            false
        }
    }

    /// Move to the previous card, or to the placeholder from the first card.
    /// No-op on the placeholder.
    pub fn retreat(&mut self) -> bool {
        match self.cursor {
            Some(0) => {
                self.cursor = None;
                true
            }
            Some(i) => {
                self.cursor = Some(i - 1);
                true
            }
            None => false,
        }
    }

    // === Card actions ===

    /// Apply a card action to the active card.
    ///
    /// `available` is the expansion-filtered pool that replacements are
    /// drawn from.
    pub fn apply(&mut self, action: CardAction, available: &[Card]) -> DeckResult<ActionReport> {
        match action {
            CardAction::ShuffleAnywhere => self.reinsert_anywhere(),
            CardAction::ShuffleWithinNext(n) => self.reinsert_within_next(n),
            CardAction::ReplaceSameType => self.replace_with_unseen(available),
        }
    }

    /// Move the active card to a uniformly chosen slot after the cursor.
    ///
    /// The slot right after the cursor is included, so the card may land
    /// one place later than it was.
    pub fn reinsert_anywhere(&mut self) -> DeckResult<ActionReport> {
        let i = self.active_index()?;
        let card = self.deck.remove(i);

        let len = self.deck.len();
        let slots = len - i;
        let at = if slots == 0 { len } else { i + 1 + self.rng.below(slots) };

        log::debug!("reinsert '{}' from {} to {} of {}", card.name, i, at, len + 1);
        self.deck.insert(at, card);
        self.step_back(i);

        Ok(ActionReport::single(Notice::ShuffledAnywhere))
    }

    /// Move the active card to a uniformly chosen slot within the next `n`.
    ///
    /// `n` is clamped to the number of cards after the cursor. With no cards
    /// after the cursor nothing moves.
    pub fn reinsert_within_next(&mut self, n: usize) -> DeckResult<ActionReport> {
        let i = self.active_index()?;
        if n == 0 {
            return Err(DeckError::InvalidCount(n.to_string()));
        }

        let remaining = self.deck.len() - (i + 1);
        if remaining == 0 {
            log::debug!("reinsert within {} skipped: cursor on last card", n);
            return Ok(ActionReport::single(Notice::NothingToShuffleInto));
        }

        let mut report = ActionReport::default();
        let n = if n > remaining {
            report.push(Notice::OnlyRemaining(remaining));
            remaining
        } else {
            n
        };

        let card = self.deck.remove(i);
        let at = i + 1 + self.rng.below(n);

        log::debug!("reinsert '{}' from {} to {} (within next {})", card.name, i, at, n);
        self.deck.insert(at, card);
        self.step_back(i);

        report.push(Notice::ShuffledWithinNext(n));
        Ok(report)
    }

    /// Replace the active card with a card of the same type that is not
    /// anywhere in the deck.
    ///
    /// Types compare trimmed and case-insensitive; "in the deck" compares
    /// name and image. The cursor does not move.
    pub fn replace_with_unseen(&mut self, available: &[Card]) -> DeckResult<ActionReport> {
        let i = self.active_index()?;
        let active_type = self.deck[i].card_type.clone();

        let in_deck: FxHashSet<_> = self.deck.iter().map(Card::identity).collect();
        let candidates: Vec<&Card> = available
            .iter()
            .filter(|c| c.has_type(&active_type) && !in_deck.contains(&c.identity()))
            .collect();

        if candidates.is_empty() {
            log::debug!("no unseen '{}' cards to replace {}", active_type, i);
            return Ok(ActionReport::single(Notice::NoUnseenCandidates));
        }

        let pick = candidates[self.rng.below(candidates.len())].clone();
        log::debug!("replace '{}' at {} with '{}'", self.deck[i].name, i, pick.name);
        self.deck.set(i, pick);

        Ok(ActionReport::single(Notice::Replaced))
    }

    // === Reading ===

    /// Lifecycle state.
    #[must_use]
    pub fn state(&self) -> DeckState {
        match (self.deck.is_empty(), self.cursor) {
            (true, _) => DeckState::Empty,
            (false, None) => DeckState::Placeholder,
            (false, Some(i)) => DeckState::Active(i),
        }
    }

    /// Cursor as an index, `-1` for the placeholder.
    #[must_use]
    pub fn cursor(&self) -> isize {
        self.cursor.map_or(-1, |i| i as isize)
    }

    /// Cursor position, `None` for the placeholder.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    /// The face-up card.
    #[must_use]
    pub fn active_card(&self) -> Option<&Card> {
        self.cursor.and_then(|i| self.deck.get(i))
    }

    /// The deck in draw order. Cloning is O(1).
    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    /// Check if no deck has been built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Progress indicator for the current cursor.
    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        Progress::new(self.cursor, self.deck.len())
    }

    /// View for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let face = match self.active_card() {
            Some(card) => Face::Card(card.clone()),
            None => Face::Placeholder,
        };
        Snapshot {
            face,
            progress: self.progress(),
        }
    }

    fn active_index(&self) -> DeckResult<usize> {
        self.cursor.ok_or(DeckError::NoActiveCard)
    }

    fn step_back(&mut self, from: usize) {
        self.cursor = from.checked_sub(1);
    }
}

/// Fisher-Yates shuffle: for each index from the last down to 1, swap it
/// with a uniformly drawn index at or below it.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}
