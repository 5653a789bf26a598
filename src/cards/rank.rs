//! Card ranks and cyclic adjacency.
//!
//! Numbered ranks live in the closed range `MIN_RANK..=MAX_RANK` and wrap
//! around: the rank after `MAX_RANK` is `MIN_RANK` and vice versa. The
//! wildcard is a separate variant and never takes part in the arithmetic.
//!
//! ```
//! use speed_engine::cards::Rank;
//!
//! let king = Rank::numbered(13).unwrap();
//! let ace = Rank::numbered(1).unwrap();
//!
//! assert_eq!(king.next(), ace);
//! assert!(king.is_adjacent(ace));
//! assert!(Rank::Wildcard.is_adjacent(king));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RankError;

/// Lowest numbered rank.
pub const MIN_RANK: u8 = 1;

/// Highest numbered rank.
pub const MAX_RANK: u8 = 13;

/// Number of distinct numbered ranks.
pub const RANK_COUNT: usize = (MAX_RANK - MIN_RANK + 1) as usize;

/// Face value of a card.
///
/// Values built through [`Rank::numbered`] are always in range. A
/// `Numbered` value constructed directly outside the range still behaves
/// totally: anything at or above `MAX_RANK` wraps to `MIN_RANK` and anything
/// at or below `MIN_RANK` wraps to `MAX_RANK`. Deserialization goes through
/// the same range check as [`Rank::numbered`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRank")]
pub enum Rank {
    /// A rank in `MIN_RANK..=MAX_RANK`.
    Numbered(u8),
    /// Adjacent to every rank, including another wildcard.
    Wildcard,
}

/// Wire shape of [`Rank`] before the range check.
#[derive(Deserialize)]
#[serde(rename = "Rank")]
enum RawRank {
    Numbered(u8),
    Wildcard,
}

impl TryFrom<RawRank> for Rank {
    type Error = RankError;

    fn try_from(raw: RawRank) -> Result<Self, Self::Error> {
        match raw {
            RawRank::Numbered(v) => Rank::numbered(v).ok_or(RankError::OutOfRange(v)),
            RawRank::Wildcard => Ok(Rank::Wildcard),
        }
    }
}

impl Rank {
    /// Create a numbered rank, or `None` if `value` is out of range.
    #[must_use]
    pub const fn numbered(value: u8) -> Option<Self> {
        if value >= MIN_RANK && value <= MAX_RANK {
            Some(Self::Numbered(value))
        } else {
            None
        }
    }

    /// Iterate over every numbered rank in ascending order.
    pub fn all_numbered() -> impl Iterator<Item = Rank> {
        (MIN_RANK..=MAX_RANK).map(Rank::Numbered)
    }

    /// The numeric value, or `None` for the wildcard.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        match self {
            Rank::Numbered(v) => Some(v),
            Rank::Wildcard => None,
        }
    }

    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Rank::Wildcard)
    }

    /// Cyclic successor. The wildcard is its own successor.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Rank::Numbered(v) if v < MAX_RANK => Rank::Numbered(v + 1),
            Rank::Numbered(_) => Rank::Numbered(MIN_RANK),
            Rank::Wildcard => Rank::Wildcard,
        }
    }

    /// Cyclic predecessor. The wildcard is its own predecessor.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Rank::Numbered(v) if v > MIN_RANK => Rank::Numbered(v - 1),
            Rank::Numbered(_) => Rank::Numbered(MAX_RANK),
            Rank::Wildcard => Rank::Wildcard,
        }
    }

    /// Symmetric adjacency: one rank is the cyclic `next` or `prev` of the
    /// other, or either side is the wildcard.
    #[must_use]
    pub fn is_adjacent(self, other: Rank) -> bool {
        match (self, other) {
            (Rank::Wildcard, _) | (_, Rank::Wildcard) => true,
            (Rank::Numbered(_), Rank::Numbered(_)) => {
                self.next() == other || self.prev() == other
            }
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Numbered(v) => write!(f, "{}", v),
            Rank::Wildcard => write!(f, "*"),
        }
    }
}
