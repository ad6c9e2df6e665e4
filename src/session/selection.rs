//! Expansion and card-type selection.
//!
//! Expansions are kept in catalog order, and card types in sorted order,
//! whatever order the caller passed them in.

use crate::cards::{card_types, Card, Catalog};
use crate::core::config::SelectionConfig;

/// The user's current choice of expansions and card types, plus the pool
/// those expansions make available.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    expansions: Vec<String>,
    available: Vec<Card>,
    all_types: Vec<String>,
    card_types: Vec<String>,
}

impl Selection {
    /// Every expansion and every type selected.
    #[must_use]
    pub fn everything(catalog: &Catalog) -> Self {
        let mut selection = Self::default();
        selection.select_expansions(catalog, catalog.expansions(), &[] as &[&str]);
        selection
    }

    /// Restore a saved selection.
    ///
    /// Unknown expansions are dropped. An empty saved type list selects
    /// every available type.
    #[must_use]
    pub fn restore(catalog: &Catalog, config: &SelectionConfig) -> Self {
        let mut selection = Self::default();
        selection.select_expansions(
            catalog,
            config.selected_games.as_slice(),
            config.selected_card_types.as_slice(),
        );
        selection
    }

    /// Change the selected expansions.
    ///
    /// Previously chosen types that are still available stay chosen; if no
    /// type had been chosen, every available type is.
    pub fn set_expansions<S: AsRef<str>>(&mut self, catalog: &Catalog, expansions: &[S]) {
        let previous = std::mem::take(&mut self.card_types);
        self.select_expansions(catalog, expansions, previous.as_slice());
    }

    /// Change the selected card types. Types not in the pool are ignored.
    pub fn set_card_types<S: AsRef<str>>(&mut self, card_types: &[S]) {
        self.card_types = self
            .all_types
            .iter()
            .filter(|t| card_types.iter().any(|c| c.as_ref() == t.as_str()))
            .cloned()
            .collect();
    }

    fn select_expansions<S: AsRef<str>, T: AsRef<str>>(
        &mut self,
        catalog: &Catalog,
        expansions: &[S],
        wanted_types: &[T],
    ) {
        self.expansions = catalog
            .expansions()
            .iter()
            .filter(|e| expansions.iter().any(|s| s.as_ref() == e.as_str()))
            .cloned()
            .collect();
        self.available = catalog.available(self.expansions.as_slice());
        self.all_types = card_types(&self.available);

        if wanted_types.is_empty() {
            self.card_types = self.all_types.clone();
        } else {
            self.set_card_types(wanted_types);
        }
    }

    /// Selected expansions, in catalog order.
    #[must_use]
    pub fn expansions(&self) -> &[String] {
        &self.expansions
    }

    /// Cards from the selected expansions.
    #[must_use]
    pub fn available(&self) -> &[Card] {
        &self.available
    }

    /// Every type present in the available pool, sorted.
    #[must_use]
    pub fn all_types(&self) -> &[String] {
        &self.all_types
    }

    /// Selected types, sorted.
    #[must_use]
    pub fn card_types(&self) -> &[String] {
        &self.card_types
    }

    /// Whether a card's type is selected.
    #[must_use]
    pub fn includes(&self, card: &Card) -> bool {
        self.card_types.iter().any(|t| *t == card.card_type)
    }

    /// The persisted form of this selection.
    #[must_use]
    pub fn to_config(&self) -> SelectionConfig {
        SelectionConfig {
            selected_games: self.expansions.clone(),
            selected_card_types: self.card_types.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_cards(vec![
            Card::new("A", "Hero", "a.jpg", "Base"),
            Card::new("B", "Villain", "b.jpg", "Base"),
            Card::new("X", "Location", "x.jpg", "Promo"),
            Card::new("Y", "Hero", "y.jpg", "Promo"),
        ])
    }

    #[test]
    fn test_everything() {
        let selection = Selection::everything(&catalog());
        assert_eq!(selection.expansions(), ["Base", "Promo"]);
        assert_eq!(selection.card_types(), ["Hero", "Location", "Villain"]);
        assert_eq!(selection.available().len(), 4);
    }

    #[test]
    fn test_restore_keeps_catalog_order_and_drops_unknown() {
        let config = SelectionConfig::new(["Promo", "Gone", "Base"], ["Villain"]);
        let selection = Selection::restore(&catalog(), &config);

        assert_eq!(selection.expansions(), ["Base", "Promo"]);
        assert_eq!(selection.card_types(), ["Villain"]);
    }

    #[test]
    fn test_restore_without_types_selects_all() {
        let config = SelectionConfig::new(["Promo"], Vec::<String>::new());
        let selection = Selection::restore(&catalog(), &config);

        assert_eq!(selection.card_types(), ["Hero", "Location"]);
    }

    #[test]
    fn test_expansion_change_keeps_still_available_types() {
        let catalog = catalog();
        let mut selection = Selection::everything(&catalog);
        selection.set_card_types(&["Villain", "Location"]);

        selection.set_expansions(&catalog, &["Base"]);
        assert_eq!(selection.all_types(), ["Hero", "Villain"]);
        assert_eq!(selection.card_types(), ["Villain"]);
    }

    #[test]
    fn test_unknown_types_ignored() {
        let mut selection = Selection::everything(&catalog());
        selection.set_card_types(&["Dragon"]);
        assert!(selection.card_types().is_empty());
    }

    #[test]
    fn test_includes_is_exact() {
        let mut selection = Selection::everything(&catalog());
        selection.set_card_types(&["Hero"]);

        assert!(selection.includes(&Card::new("Z", "Hero", "z.jpg", "Base")));
        assert!(!selection.includes(&Card::new("Z", "hero", "z.jpg", "Base")));
    }

    #[test]
    fn test_to_config() {
        let mut selection = Selection::everything(&catalog());
        selection.set_card_types(&["Hero"]);

        let config = selection.to_config();
        assert_eq!(config.selected_games, vec!["Base", "Promo"]);
        assert_eq!(config.selected_card_types, vec!["Hero"]);
    }
}
