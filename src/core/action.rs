//! Player intents and the moves they produce.
//!
//! The presentation layer turns raw input into an [`Intent`]; the game
//! answers with either a [`Move`] (what actually happened) or an
//! [`IllegalMove`](crate::error::IllegalMove). Moves that change the table
//! are recorded as [`MoveRecord`]s in the game's history, including a card
//! lost to a rejected drop.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Card;
use crate::zones::StackTarget;

/// A high-level request from a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Pick up the top card of a stack.
    Grab(StackTarget),
    /// Put the held card on a stack.
    Drop(StackTarget),
    /// Let go of the held card without placing it.
    Discard,
}

/// The effect of an accepted intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// A card moved from a personal pile into the player's hand.
    Grabbed { card: Card, from: StackTarget },

    /// The held card was placed on a stack.
    Placed { card: Card, onto: StackTarget },

    /// The held card was thrown away. `None` if the hand was already empty.
    Discarded(Option<Card>),

    /// The held card went back to the personal pile it came from.
    Returned { card: Card, to: StackTarget },
}

/// A move that changed the table, with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who acted.
    pub player: PlayerId,

    pub intent: Intent,

    pub outcome: Move,

    /// Position in the game's history, starting at 0.
    pub sequence: usize,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: PlayerId, intent: Intent, outcome: Move, sequence: usize) -> Self {
        Self {
            player,
            intent,
            outcome,
            sequence,
        }
    }
}
