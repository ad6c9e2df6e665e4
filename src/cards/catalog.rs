//! Card catalog grouped by expansion.
//!
//! The `Catalog` is built once from the source data and never changes.
//! Expansions keep the order in which they first appear in the source,
//! and cards keep their source order within each expansion.

use rustc_hash::{FxHashMap, FxHashSet};

use super::card::Card;
use crate::core::error::{DeckError, DeckResult};

/// Cards partitioned by expansion.
///
/// ## Example
///
/// ```
/// use deck_randomizer::cards::{Card, Catalog};
///
/// let catalog = Catalog::from_cards(vec![
///     Card::new("A", "Hero", "a.jpg", "Base"),
///     Card::new("B", "Hero", "b.jpg", "Promo"),
/// ]);
///
/// assert_eq!(catalog.expansions(), ["Base", "Promo"]);
/// assert_eq!(catalog.cards_in("Promo").len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    expansions: Vec<String>,
    cards: FxHashMap<String, Vec<Card>>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a flat card list.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut catalog = Self::new();
        for card in cards {
            catalog.insert(card);
        }
        catalog
    }

    /// Parse a catalog from a JSON array of card records.
    pub fn from_json(json: &str) -> DeckResult<Self> {
        let cards: Vec<Card> = serde_json::from_str(json).map_err(DeckError::Catalog)?;
        let catalog = Self::from_cards(cards);
        log::info!(
            "loaded catalog: {} cards across {} expansions",
            catalog.len(),
            catalog.expansions.len()
        );
        Ok(catalog)
    }

    fn insert(&mut self, card: Card) {
        match self.cards.get_mut(&card.expansion) {
            Some(list) => list.push(card),
            None => {
                self.expansions.push(card.expansion.clone());
                self.cards.insert(card.expansion.clone(), vec![card]);
            }
        }
    }

    /// Expansion names in first-appearance order.
    #[must_use]
    pub fn expansions(&self) -> &[String] {
        &self.expansions
    }

    /// Check if an expansion exists.
    #[must_use]
    pub fn contains_expansion(&self, expansion: &str) -> bool {
        self.cards.contains_key(expansion)
    }

    /// Cards of one expansion, empty if the expansion is unknown.
    #[must_use]
    pub fn cards_in(&self, expansion: &str) -> &[Card] {
        self.cards.get(expansion).map_or(&[], |v| v.as_slice())
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.values().map(Vec::len).sum()
    }

    /// Check if the catalog has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Flattened cards of the selected expansions, in selection order.
    ///
    /// Unknown expansion names contribute nothing.
    pub fn available<S: AsRef<str>>(&self, selected: &[S]) -> Vec<Card> {
        selected
            .iter()
            .flat_map(|expansion| self.cards_in(expansion.as_ref()))
            .cloned()
            .collect()
    }
}

/// Sorted, deduplicated card types present in a pool.
pub fn card_types(cards: &[Card]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut types: Vec<String> = cards
        .iter()
        .filter(|card| seen.insert(card.card_type.as_str()))
        .map(|card| card.card_type.clone())
        .collect();
    types.sort();
    types
}
