//! Error type shared by the catalog, engine and session layers.
//!
//! Every variant is recoverable: the operation that produced it leaves all
//! state untouched. The `Display` text is the notice shown to the user.

use thiserror::Error;

/// Reasons a requested operation was refused.
#[derive(Debug, Error)]
pub enum DeckError {
    /// Deck generation requested with no expansion chosen.
    #[error("Please select at least one expansion.")]
    NoExpansionsSelected,

    /// Deck generation requested with no card type chosen.
    #[error("Please select at least one card type.")]
    NoTypesSelected,

    /// The selected expansions and types match no card.
    #[error("No cards available with the selected card types.")]
    EmptySelection,

    /// A card action was requested while the placeholder is showing.
    #[error("No active card to apply action.")]
    NoActiveCard,

    /// The count for a "shuffle into next N" action was not a positive integer.
    #[error("Please enter a valid number for N. (got {0:?})")]
    InvalidCount(String),

    /// The requested card action is not one the engine knows.
    #[error("Please select a valid action. (got {0:?})")]
    UnknownAction(String),

    /// The catalog source could not be parsed.
    #[error("failed to parse card catalog: {0}")]
    Catalog(#[source] serde_json::Error),

    /// The stored selection configuration could not be read or written.
    #[error("failed to read saved configuration: {0}")]
    Config(#[source] serde_json::Error),
}

/// Result alias used across the crate.
pub type DeckResult<T> = Result<T, DeckError>;
