//! Card records.
//!
//! A `Card` is immutable catalog data. Two cards are the same physical card
//! when their name and image match; the type and expansion do not take part
//! in identity.

use serde::{Deserialize, Serialize};

/// A single catalog card.
///
/// Field names on the wire follow the catalog file format.
///
/// ## Example
///
/// ```
/// use deck_randomizer::cards::Card;
///
/// let card = Card::new("Goblin", "Minion", "goblin.jpg", "Base");
/// assert_eq!(card.caption(), "Goblin (Minion)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Display name.
    #[serde(rename = "CARD NAME")]
    pub name: String,

    /// Card type, used for filtering and same-type replacement.
    #[serde(rename = "TYPE", default)]
    pub card_type: String,

    /// Image file name, relative to the image directory.
    #[serde(rename = "Content", default)]
    pub image: String,

    /// Expansion this card belongs to.
    #[serde(rename = "EXPANSION")]
    pub expansion: String,
}

impl Card {
    /// Create a new card.
    pub fn new(
        name: impl Into<String>,
        card_type: impl Into<String>,
        image: impl Into<String>,
        expansion: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            card_type: card_type.into(),
            image: image.into(),
            expansion: expansion.into(),
        }
    }

    /// Physical-card identity.
    #[must_use]
    pub fn identity(&self) -> CardIdentity<'_> {
        CardIdentity {
            name: &self.name,
            image: &self.image,
        }
    }

    /// Check whether this card has the given type, ignoring case and
    /// surrounding whitespace.
    #[must_use]
    pub fn has_type(&self, card_type: &str) -> bool {
        normalize_type(&self.card_type) == normalize_type(card_type)
    }

    /// Display caption: the name, followed by the type in parentheses when
    /// the card has one.
    #[must_use]
    pub fn caption(&self) -> String {
        if self.card_type.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.card_type)
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.caption(), self.expansion)
    }
}

/// Name + image pair identifying a physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardIdentity<'a> {
    pub name: &'a str,
    pub image: &'a str,
}

fn normalize_type(card_type: &str) -> String {
    card_type.trim().to_lowercase()
}
