//! A user session: catalog, selection, deck engine and config store.

use super::selection::Selection;
use crate::cards::{Card, Catalog};
use crate::core::config::{ConfigStore, SelectionConfig};
use crate::core::error::{DeckError, DeckResult};
use crate::core::rng::{GameRng, RandomSource};
use crate::deck::{ActionReport, CardAction, DeckEngine, Snapshot};

/// One user's deck session.
///
/// Selection changes and successful deck generation write the selection to
/// the store. The deck itself is never stored.
///
/// ## Usage
///
/// ```
/// use deck_randomizer::cards::{Card, Catalog};
/// use deck_randomizer::core::{GameRng, MemoryStore};
/// use deck_randomizer::session::DeckSession;
///
/// let catalog = Catalog::from_cards(vec![
///     Card::new("A", "Hero", "a.jpg", "Base"),
///     Card::new("B", "Villain", "b.jpg", "Base"),
/// ]);
///
/// let mut session = DeckSession::open(catalog, MemoryStore::new(), GameRng::new(7));
/// session.set_card_types(&["Hero"]).unwrap();
/// assert_eq!(session.generate().unwrap(), 1);
///
/// let snapshot = session.next();
/// assert_eq!(snapshot.face.card().unwrap().name, "A");
/// ```
#[derive(Debug)]
pub struct DeckSession<S, R = GameRng> {
    catalog: Catalog,
    selection: Selection,
    engine: DeckEngine<R>,
    store: S,
}

impl<S: ConfigStore, R: RandomSource> DeckSession<S, R> {
    /// Start a session, restoring any saved selection.
    ///
    /// A saved selection that cannot be parsed is ignored.
    pub fn open(catalog: Catalog, store: S, rng: R) -> Self {
        let selection = match SelectionConfig::load(&store) {
            Ok(Some(config)) => Selection::restore(&catalog, &config),
            Ok(None) => Selection::everything(&catalog),
            Err(err) => {
                log::warn!("ignoring saved selection: {}", err);
                Selection::everything(&catalog)
            }
        };

        Self {
            catalog,
            selection,
            engine: DeckEngine::new(rng),
            store,
        }
    }

    // === Selection ===

    /// Choose expansions and save the selection.
    pub fn set_expansions<T: AsRef<str>>(&mut self, expansions: &[T]) -> DeckResult<()> {
        self.selection.set_expansions(&self.catalog, expansions);
        self.save()
    }

    /// Choose card types and save the selection.
    pub fn set_card_types<T: AsRef<str>>(&mut self, card_types: &[T]) -> DeckResult<()> {
        self.selection.set_card_types(card_types);
        self.save()
    }

    fn save(&mut self) -> DeckResult<()> {
        self.selection.to_config().save(&mut self.store)
    }

    // === Deck ===

    /// Build a new deck from the current selection and save the selection.
    ///
    /// Returns the deck length.
    pub fn generate(&mut self) -> DeckResult<usize> {
        let result = self.build_deck();
        if let Err(err) = &result {
            log::warn!("deck generation refused: {}", err);
        }
        let len = result?;
        self.save()?;
        Ok(len)
    }

    fn build_deck(&mut self) -> DeckResult<usize> {
        if self.selection.expansions().is_empty() {
            return Err(DeckError::NoExpansionsSelected);
        }
        if self.selection.card_types().is_empty() {
            return Err(DeckError::NoTypesSelected);
        }

        let selection = &self.selection;
        self.engine
            .build(selection.available(), |card| selection.includes(card))
    }

    /// Show the next card.
    pub fn next(&mut self) -> Snapshot {
        self.engine.advance();
        self.engine.snapshot()
    }

    /// Show the previous card, or the placeholder.
    pub fn previous(&mut self) -> Snapshot {
        self.engine.retreat();
        self.engine.snapshot()
    }

    /// Apply a card action to the active card.
    ///
    /// Replacements are drawn from every selected expansion, regardless of
    /// the selected card types.
    pub fn apply(&mut self, action: CardAction) -> DeckResult<ActionReport> {
        let result = self.engine.apply(action, self.selection.available());
        if let Err(err) = &result {
            log::warn!("{:?} refused: {}", action, err);
        }
        result
    }

    /// Apply a card action given by key and raw count input.
    ///
    /// The active card is checked before the input is parsed.
    pub fn apply_raw(&mut self, kind: &str, count: &str) -> DeckResult<ActionReport> {
        if self.engine.position().is_none() {
            log::warn!("{} refused: {}", kind, DeckError::NoActiveCard);
            return Err(DeckError::NoActiveCard);
        }
        let action = CardAction::parse(kind, count).map_err(|err| {
            log::warn!("{} refused: {}", kind, err);
            err
        })?;
        self.apply(action)
    }

    // === Reading ===

    /// View for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Cards from the selected expansions.
    #[must_use]
    pub fn available_cards(&self) -> &[Card] {
        self.selection.available()
    }

    /// Every card type the selected expansions offer.
    #[must_use]
    pub fn card_types(&self) -> &[String] {
        self.selection.all_types()
    }

    #[must_use]
    pub fn engine(&self) -> &DeckEngine<R> {
        &self.engine
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
