//! Card actions and the notices they produce.
//!
//! A card action reorders or replaces the active card. Each action returns an
//! `ActionReport` listing the notices the user should see, in order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::{DeckError, DeckResult};

/// A reordering or replacement applied to the active card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardAction {
    /// Put the card back anywhere after the cursor.
    ShuffleAnywhere,
    /// Put the card back within the next N cards.
    ShuffleWithinNext(usize),
    /// Swap the card for an unseen card of the same type.
    ReplaceSameType,
}

impl CardAction {
    /// Key for `ShuffleAnywhere` in `parse`.
    pub const SHUFFLE_ANYWHERE: &'static str = "shuffleAnywhere";
    /// Key for `ShuffleWithinNext` in `parse`.
    pub const SHUFFLE_TOP_N: &'static str = "shuffleTopN";
    /// Key for `ReplaceSameType` in `parse`.
    pub const REPLACE_SAME_TYPE: &'static str = "replaceSameType";

    /// Build an action from its key and the raw count input.
    ///
    /// The count is only read for `shuffleTopN`.
    pub fn parse(kind: &str, count: &str) -> DeckResult<Self> {
        match kind {
            Self::SHUFFLE_ANYWHERE => Ok(Self::ShuffleAnywhere),
            Self::SHUFFLE_TOP_N => parse_count(count).map(Self::ShuffleWithinNext),
            Self::REPLACE_SAME_TYPE => Ok(Self::ReplaceSameType),
            other => Err(DeckError::UnknownAction(other.to_string())),
        }
    }
}

/// Parse a positive count from free-form input.
///
/// Reads an integer prefix: leading whitespace, an optional sign, then
/// digits. Anything after the digits is ignored, so `"3 cards"` is 3.
/// Input with no digits, or a value of zero or less, is rejected.
pub fn parse_count(input: &str) -> DeckResult<usize> {
    let invalid = || DeckError::InvalidCount(input.to_string());

    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return Err(invalid());
    }

    let value = digits.bytes().fold(0usize, |acc, b| {
        acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
    });
    if negative || value == 0 {
        return Err(invalid());
    }
    Ok(value)
}

/// User-facing outcome of a card action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// The card went back somewhere after the cursor.
    ShuffledAnywhere,
    /// The requested N exceeded the cards left; it was reduced to this many.
    OnlyRemaining(usize),
    /// The card went back within the next N cards.
    ShuffledWithinNext(usize),
    /// No card follows the cursor, so nothing moved.
    NothingToShuffleInto,
    /// The active card was swapped for an unseen one.
    Replaced,
    /// Every card of the active card's type is already in the deck.
    NoUnseenCandidates,
}

impl Notice {
    /// Whether this notice reports that the action changed nothing.
    #[must_use]
    pub fn is_noop(self) -> bool {
        matches!(self, Notice::NothingToShuffleInto | Notice::NoUnseenCandidates)
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::ShuffledAnywhere => write!(f, "Card shuffled back into the deck."),
            Notice::OnlyRemaining(k) => write!(
                f,
                "Only {k} cards remaining. Shuffling into the next {k} cards."
            ),
            Notice::ShuffledWithinNext(k) => write!(f, "Card shuffled into the next {k} cards."),
            Notice::NothingToShuffleInto => write!(f, "No remaining cards to shuffle into."),
            Notice::Replaced => write!(
                f,
                "Replaced the active card with a new unseen card of the same type."
            ),
            Notice::NoUnseenCandidates => {
                write!(f, "No unseen cards of the same type are available.")
            }
        }
    }
}

/// Notices produced by one card action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionReport {
    notices: SmallVec<[Notice; 2]>,
}

impl ActionReport {
    /// Report with a single notice.
    #[must_use]
    pub fn single(notice: Notice) -> Self {
        let mut report = Self::default();
        report.push(notice);
        report
    }

    pub(crate) fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Notices in the order they were raised.
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Whether the deck or cursor changed.
    #[must_use]
    pub fn changed_deck(&self) -> bool {
        !self.notices.iter().any(|n| n.is_noop())
    }

    /// Check if a specific notice was raised.
    #[must_use]
    pub fn contains(&self, notice: Notice) -> bool {
        self.notices.contains(&notice)
    }

    /// Notice texts, ready for a notification channel.
    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.notices.iter().map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_integer_prefix() {
        assert_eq!(parse_count("3").unwrap(), 3);
        assert_eq!(parse_count("  12").unwrap(), 12);
        assert_eq!(parse_count("+4").unwrap(), 4);
        assert_eq!(parse_count("5 cards").unwrap(), 5);
        assert_eq!(parse_count("2.9").unwrap(), 2);
    }

    #[test]
    fn test_parse_count_rejects_non_positive() {
        for input in ["", "   ", "abc", "0", "-3", "-", "+", "x5"] {
            assert!(
                matches!(parse_count(input), Err(DeckError::InvalidCount(_))),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_count_saturates() {
        assert_eq!(parse_count("99999999999999999999999999").unwrap(), usize::MAX);
    }

    #[test]
    fn test_parse_action_keys() {
        assert_eq!(
            CardAction::parse("shuffleAnywhere", "").unwrap(),
            CardAction::ShuffleAnywhere
        );
        assert_eq!(
            CardAction::parse("shuffleTopN", "3").unwrap(),
            CardAction::ShuffleWithinNext(3)
        );
        assert_eq!(
            CardAction::parse("replaceSameType", "junk").unwrap(),
            CardAction::ReplaceSameType
        );
        assert!(matches!(
            CardAction::parse("shuffleTopN", "zero"),
            Err(DeckError::InvalidCount(_))
        ));
        assert!(matches!(
            CardAction::parse("discard", ""),
            Err(DeckError::UnknownAction(_))
        ));
    }

    #[test]
    fn test_notice_text() {
        assert_eq!(
            Notice::OnlyRemaining(2).to_string(),
            "Only 2 cards remaining. Shuffling into the next 2 cards."
        );
        assert_eq!(
            Notice::ShuffledWithinNext(4).to_string(),
            "Card shuffled into the next 4 cards."
        );
    }

    #[test]
    fn test_report_changed_deck() {
        let mut report = ActionReport::single(Notice::OnlyRemaining(1));
        report.push(Notice::ShuffledWithinNext(1));
        assert!(report.changed_deck());
        assert_eq!(report.messages().count(), 2);

        let noop = ActionReport::single(Notice::NothingToShuffleInto);
        assert!(!noop.changed_deck());
    }
}
