//! Card data: records and the expansion catalog.
//!
//! ## Key Types
//!
//! - `Card`: Immutable catalog record (name, type, image, expansion)
//! - `CardIdentity`: Name + image pair used for "already in the deck" checks
//! - `Catalog`: Cards grouped by expansion

pub mod card;
pub mod catalog;

pub use card::{Card, CardIdentity};
pub use catalog::{card_types, Catalog};
