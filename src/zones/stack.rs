//! Bounded last-in-first-out card stack.
//!
//! Every stack on the table has a fixed capacity set at construction:
//! personal piles hold 4, side stacks 1, center stacks the whole deck.
//! The invariant `0 <= len <= capacity` holds after every operation, and a
//! failed operation leaves the stack untouched.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::error::StackError;

/// A fixed-capacity LIFO stack of cards.
///
/// Backed by a `SmallVec` so the common personal-pile size (4) needs no
/// heap allocation. A stored stack holding more cards than its capacity is
/// refused on deserialization.
///
/// ```
/// use speed_engine::cards::Card;
/// use speed_engine::zones::CardStack;
/// use speed_engine::error::StackError;
///
/// let mut stack = CardStack::new(1);
/// stack.push(Card::numbered(3).unwrap()).unwrap();
/// assert_eq!(
///     stack.push(Card::numbered(4).unwrap()),
///     Err(StackError::Overflow { capacity: 1 })
/// );
/// assert_eq!(stack.pop(), Ok(Card::numbered(3).unwrap()));
/// assert_eq!(stack.pop(), Err(StackError::Underflow));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCardStack")]
pub struct CardStack {
    /// Bottom at index 0, top at the end.
    cards: SmallVec<[Card; 4]>,
    capacity: usize,
}

#[derive(Deserialize)]
struct RawCardStack {
    cards: SmallVec<[Card; 4]>,
    capacity: usize,
}

impl TryFrom<RawCardStack> for CardStack {
    type Error = StackError;

    fn try_from(raw: RawCardStack) -> Result<Self, Self::Error> {
        if raw.cards.len() > raw.capacity {
            return Err(StackError::Overflow {
                capacity: raw.capacity,
            });
        }
        Ok(Self {
            cards: raw.cards,
            capacity: raw.capacity,
        })
    }
}

impl CardStack {
    /// Create an empty stack that holds at most `capacity` cards.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cards: SmallVec::new(),
            capacity,
        }
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Overflow {
                capacity: self.capacity,
            });
        }
        self.cards.push(card);
        Ok(())
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Result<Card, StackError> {
        self.cards.pop().ok_or(StackError::Underflow)
    }

    /// Return the top card without removing it.
    pub fn top(&self) -> Result<Card, StackError> {
        self.cards.last().copied().ok_or(StackError::Underflow)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}
