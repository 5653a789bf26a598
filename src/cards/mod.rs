//! Cards: ranks, cards and the dealing deck.
//!
//! ## Key Types
//!
//! - `Rank`: numbered rank with cyclic adjacency, or the wildcard
//! - `Card`: a value wrapping one rank
//! - `Deck`: ordered, single-pass sequence used to seed a game

pub mod rank;
pub mod card;
pub mod deck;

pub use rank::{Rank, MAX_RANK, MIN_RANK, RANK_COUNT};
pub use card::Card;
pub use deck::{standard_cards, Deck, COPIES_PER_RANK, DEFAULT_WILDCARDS};
