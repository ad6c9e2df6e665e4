//! Session layer: ties the catalog, the user's selection, the deck engine
//! and the config store together.
//!
//! ## Key Types
//!
//! - `Selection`: Chosen expansions and card types
//! - `DeckSession`: Entry point for a host (browser glue, bindings, tests)

pub mod deck_session;
pub mod selection;

pub use deck_session::DeckSession;
pub use selection::Selection;
