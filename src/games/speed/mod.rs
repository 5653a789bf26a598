//! Speed: a real-time two-player shedding game.
//!
//! Each player has six personal piles of four cards. Two center stacks are
//! seeded from the deck. Players grab the top card of one of their own piles
//! and drop it on a center stack whose top card is next to it in rank
//! (wrapping from 13 back to 1; wildcards go anywhere). There are no turns:
//! both players act whenever they like.
//!
//! The first player whose personal piles are all empty wins. If both empty
//! out at the same instant the game is a draw.
//!
//! ## Lifecycle
//!
//! ```text
//! PreGame --(join x2, ready x2, start)--> Play --(piles empty)--> PostGame
//! ```
//!
//! Intents outside of `Play` are rejected with
//! [`IllegalMove::NotInPlay`](crate::error::IllegalMove::NotInPlay).

mod game;
mod view;

pub use game::Game;
pub use view::{StackView, TableView};
