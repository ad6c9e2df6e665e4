//! Core building blocks: errors, randomness, configuration.
//!
//! Nothing in here knows about cards. The `cards`, `deck` and `session`
//! modules build on these types.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{ConfigStore, DisplayConfig, MemoryStore, SelectionConfig, SAVED_CONFIG_KEY};
pub use error::{DeckError, DeckResult};
pub use rng::{GameRng, RandomSource};
