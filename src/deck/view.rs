//! Read-only views of the engine for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::config::DisplayConfig;

/// Position of the engine in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckState {
    /// No deck has been built.
    Empty,
    /// A deck exists and the placeholder is showing.
    Placeholder,
    /// The card at this index is showing.
    Active(usize),
}

/// What is currently face up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    Placeholder,
    Card(Card),
}

impl Face {
    /// The card, unless the placeholder is showing.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        match self {
            Face::Placeholder => None,
            Face::Card(card) => Some(card),
        }
    }

    /// Caption to render above the image.
    #[must_use]
    pub fn caption(&self, display: &DisplayConfig) -> String {
        match self {
            Face::Placeholder => display.placeholder_title.clone(),
            Face::Card(card) => card.caption(),
        }
    }

    /// Image to render.
    #[must_use]
    pub fn image_path(&self, display: &DisplayConfig) -> String {
        match self {
            Face::Placeholder => display.image_path(&display.placeholder_image),
            Face::Card(card) => display.image_path(&card.image),
        }
    }
}

/// Progress through the deck, counting the placeholder as the first slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// 1-based slot being shown.
    pub current: usize,
    /// Deck length plus the placeholder.
    pub total: usize,
}

impl Progress {
    /// Progress for a cursor over a deck of `deck_len` cards.
    ///
    /// Returns `None` for an empty deck.
    #[must_use]
    pub fn new(cursor: Option<usize>, deck_len: usize) -> Option<Self> {
        if deck_len == 0 {
            return None;
        }
        Some(Self {
            current: cursor.map_or(1, |i| i + 2),
            total: deck_len + 1,
        })
    }

    /// Percentage of the deck shown so far.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.current as f64 / self.total as f64 * 100.0
    }

    /// `percent`, rounded for display.
    #[must_use]
    pub fn rounded_percent(&self) -> u32 {
        self.percent().round() as u32
    }

    /// "Card X of Y".
    #[must_use]
    pub fn label(&self) -> String {
        format!("Card {} of {}", self.current, self.total)
    }
}

/// Everything the presentation layer needs after an operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub face: Face,
    /// `None` when no deck has been built.
    pub progress: Option<Progress>,
}

impl Snapshot {
    /// Progress text, with a fallback for an empty deck.
    #[must_use]
    pub fn progress_label(&self) -> String {
        self.progress
            .map_or_else(|| "No cards available".to_string(), |p| p.label())
    }
}
