//! Deck lifecycle: building, stepping through, and reordering a deck.
//!
//! ## Key Types
//!
//! - `DeckEngine`: Owns the deck and cursor
//! - `CardAction`: Reinsert anywhere, reinsert within N, replace same type
//! - `ActionReport` / `Notice`: What an action did, for the user
//! - `Snapshot`: Face-up card and progress, for rendering

pub mod action;
pub mod engine;
pub mod view;

pub use action::{parse_count, ActionReport, CardAction, Notice};
pub use engine::{shuffle, DeckEngine};
pub use view::{DeckState, Face, Progress, Snapshot};
