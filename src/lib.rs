//! # deck-randomizer
//!
//! Deck engine for tabletop game aids: pick expansions and card types from a
//! catalog, build a shuffled deck, and step through it with mid-game
//! reshuffles.
//!
//! ## Design Principles
//!
//! 1. **Owned state**: Deck and cursor live in a `DeckEngine` value. No
//!    globals; any number of sessions can coexist.
//!
//! 2. **Explicit outcomes**: Every operation returns a value (`Snapshot`,
//!    `ActionReport`, `DeckError`) instead of touching a UI.
//!
//! 3. **Injectable randomness**: The engine draws through `RandomSource`,
//!    so a seed or a scripted source reproduces exact decks.
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, selection config and stores
//! - `cards`: Card records and the expansion catalog
//! - `deck`: The engine, card actions, snapshots
//! - `session`: Selection handling and persistence hooks around the engine

pub mod core;
pub mod cards;
pub mod deck;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigStore, DeckError, DeckResult, DisplayConfig, GameRng, MemoryStore, RandomSource,
    SelectionConfig,
};

pub use crate::cards::{Card, CardIdentity, Catalog};

pub use crate::deck::{
    ActionReport, CardAction, DeckEngine, DeckState, Face, Notice, Progress, Snapshot,
};

pub use crate::session::{DeckSession, Selection};
