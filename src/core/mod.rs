//! Core engine types: players, configuration, RNG, intents, lifecycle.
//!
//! These are the building blocks the Speed state machine in
//! `games::speed` is assembled from.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{HeldCard, Player, PlayerId, PlayerMap, SEAT_COUNT};
pub use rng::GameRng;
pub use config::{GameConfig, IllegalDropPolicy};
pub use action::{Intent, Move, MoveRecord};
pub use state::Phase;
