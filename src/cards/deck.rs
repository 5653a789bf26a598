//! The dealing deck.
//!
//! A `Deck` is an ordered sequence consumed front to back by a cursor. The
//! engine never shuffles on its own: building a standard deck is pure and
//! deterministic, and any randomisation is a pre-processing step over the
//! card list before it is handed to [`Deck::from_cards`].
//!
//! ```
//! use speed_engine::cards::Deck;
//! use speed_engine::core::GameRng;
//!
//! // Fixed order
//! let mut ordered = Deck::standard(2);
//! assert_eq!(ordered.len(), 54);
//!
//! // Seeded shuffle, applied before the engine sees the cards
//! let mut rng = GameRng::new(42);
//! let shuffled = Deck::shuffled(2, &mut rng);
//! assert_eq!(shuffled.remaining(), 54);
//! # let _ = ordered.deal_next();
//! ```

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::rank::{Rank, RANK_COUNT};
use crate::core::GameRng;
use crate::error::DeckError;

/// Copies of each numbered rank in a standard deck.
pub const COPIES_PER_RANK: usize = 4;

/// Wildcards in the default deck variant.
pub const DEFAULT_WILDCARDS: usize = 2;

/// Card list of a standard deck in construction order: four of each rank
/// from lowest to highest, then `wildcards` wildcards.
#[must_use]
pub fn standard_cards(wildcards: usize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(RANK_COUNT * COPIES_PER_RANK + wildcards);
    for rank in Rank::all_numbered() {
        cards.extend(std::iter::repeat(Card::new(rank)).take(COPIES_PER_RANK));
    }
    cards.extend(std::iter::repeat(Card::wildcard()).take(wildcards));
    cards
}

/// Single-pass sequence of cards.
///
/// The cursor never passes the end of the card list, including for decks
/// read back from a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDeck")]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

#[derive(Deserialize)]
struct RawDeck {
    cards: Vec<Card>,
    cursor: usize,
}

impl TryFrom<RawDeck> for Deck {
    type Error = DeckError;

    fn try_from(raw: RawDeck) -> Result<Self, Self::Error> {
        if raw.cursor > raw.cards.len() {
            return Err(DeckError::CursorOutOfRange {
                cursor: raw.cursor,
                len: raw.cards.len(),
            });
        }
        Ok(Self {
            cards: raw.cards,
            cursor: raw.cursor,
        })
    }
}

impl Deck {
    /// Wrap an already-ordered card list.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }

    /// A standard deck in fixed order.
    #[must_use]
    pub fn standard(wildcards: usize) -> Self {
        Self::from_cards(standard_cards(wildcards))
    }

    /// A standard deck shuffled with `rng` before the cursor is placed.
    #[must_use]
    pub fn shuffled(wildcards: usize, rng: &mut GameRng) -> Self {
        let mut cards = standard_cards(wildcards);
        rng.shuffle(&mut cards);
        Self::from_cards(cards)
    }

    /// Deal the next card in order.
    ///
    /// Once every card has been dealt this keeps returning
    /// `DeckError::Exhausted`; the cursor never moves backwards.
    pub fn deal_next(&mut self) -> Result<Card, DeckError> {
        let card = *self.cards.get(self.cursor).ok_or(DeckError::Exhausted)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Total number of cards, dealt or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards not yet dealt.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// The undealt cards, next card first.
    #[must_use]
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.cursor..]
    }
}
