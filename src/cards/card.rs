//! Playing cards.
//!
//! A `Card` is nothing more than its rank. A standard deck has four cards of
//! every rank and they are interchangeable, so cards are plain `Copy` values
//! with no identity of their own.

use serde::{Deserialize, Serialize};

use super::rank::Rank;

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank) -> Self {
        Self { rank }
    }

    /// Create a numbered card, or `None` if `value` is out of range.
    #[must_use]
    pub const fn numbered(value: u8) -> Option<Self> {
        match Rank::numbered(value) {
            Some(rank) => Some(Self { rank }),
            None => None,
        }
    }

    #[must_use]
    pub const fn wildcard() -> Self {
        Self {
            rank: Rank::Wildcard,
        }
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Whether this card may be played onto `target` (or vice versa).
    #[must_use]
    pub fn is_next_to(self, target: Card) -> bool {
        self.rank.is_adjacent(target.rank)
    }
}

impl From<Rank> for Card {
    fn from(rank: Rank) -> Self {
        Self::new(rank)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.rank)
    }
}
