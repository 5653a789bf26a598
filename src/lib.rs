//! # speed-engine
//!
//! A rules engine for Speed, a real-time two-player card-matching game.
//!
//! Players race to empty their personal piles by moving cards onto shared
//! center stacks whose top card is next in rank (cyclically, 13 wraps to 1).
//! The engine owns the table and adjudicates every grab and drop; rendering
//! and input devices live outside it and only forward intents.
//!
//! ## Design Principles
//!
//! 1. **Synchronous, run-to-completion**: every operation finishes before
//!    the next one starts. Concurrency is handled by serializing access to a
//!    game, not inside it.
//!
//! 2. **Deterministic**: the engine never draws random numbers. A deck is
//!    shuffled (or not) before the engine sees it, so a seed fixes a deal.
//!
//! 3. **Two tiers of failure**: setup mistakes are hard errors; rejected
//!    moves during play are expected and leave the table consistent.
//!
//! ## Modules
//!
//! - `core`: Players, seats, configuration, RNG, intents, lifecycle phase
//! - `cards`: Ranks, cards and the dealing deck
//! - `zones`: Bounded card stacks and stack addressing
//! - `rules`: Win detection and game results
//! - `games`: The Speed state machine and table snapshots
//! - `sessions`: Running games keyed by session id
//! - `input`: Pointer press/release to intents
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use speed_engine::{Deck, Game, GameResult, Phase, Player, StackTarget};
//!
//! let mut game = Game::new(Deck::standard(2)).unwrap();
//! let p1 = game.join(Player::new("Nobody")).unwrap();
//! let p2 = game.join(Player::new("Somebody")).unwrap();
//! game.ready(p1).unwrap();
//! game.ready(p2).unwrap();
//! game.start().unwrap();
//!
//! // Fixed-order deal: both center stacks start on a 13, and every pile
//! // of the first column holds 1, 1, 2, 2 (top last).
//! game.grab(p1, StackTarget::Own(0)).unwrap();
//! let outcome = game.drop(p1, StackTarget::Center(0));
//! assert!(outcome.is_err()); // a 2 is not next to a 13
//!
//! assert_eq!(game.phase(), Phase::Play);
//! assert_eq!(game.result(), None::<GameResult>);
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;
pub mod sessions;
pub mod input;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, HeldCard, IllegalDropPolicy, Intent, Move, MoveRecord,
    Phase, Player, PlayerId, PlayerMap,
};

pub use crate::cards::{Card, Deck, Rank};

pub use crate::zones::{CardStack, StackKind, StackTarget};

pub use crate::rules::GameResult;

pub use crate::games::speed::{Game, StackView, TableView};

pub use crate::sessions::{SessionId, SessionRegistry, SharedGame};

pub use crate::input::PointerAdapter;

pub use crate::error::{
    DeckError, HoldError, IllegalMove, RegistryError, SessionError, SetupError, StackError,
};
