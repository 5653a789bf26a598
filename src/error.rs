//! Error types.
//!
//! Errors fall into two tiers:
//!
//! - **Hard failures** (`SessionError`, `SetupError`, `RegistryError`): the
//!   caller asked for something the session cannot do. These are always
//!   returned, never swallowed.
//! - **Illegal moves** (`IllegalMove`): expected, frequent rejections of
//!   grab/drop/discard intents during play. The game continues after them.
//!
//! The container types (`CardStack`, `Deck`, `Player`) have their own small
//! error enums that the game maps into the tiers above.

use thiserror::Error;

use crate::cards::Card;
use crate::core::{Phase, PlayerId};
use crate::zones::StackTarget;

/// Errors from a bounded [`CardStack`](crate::zones::CardStack).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StackError {
    /// Push onto a stack that is already at capacity.
    #[error("too many cards on stack (capacity {capacity})")]
    Overflow { capacity: usize },

    /// Pop or peek on an empty stack.
    #[error("no cards left on stack")]
    Underflow,
}

/// Errors from a [`Deck`](crate::cards::Deck).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Every card has already been dealt.
    #[error("deck exhausted")]
    Exhausted,

    /// A stored deck whose cursor points past its last card.
    #[error("cursor {cursor} is past the end of a {len}-card deck")]
    CursorOutOfRange { cursor: usize, len: usize },
}

/// Errors from building a [`Rank`](crate::cards::Rank).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("rank {0} is out of range")]
    OutOfRange(u8),
}

/// Errors from a player's holding slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum HoldError {
    /// The player already has a card in hand.
    #[error("already holding {0}")]
    AlreadyHolding(Card),
}

/// Session setup failures from join/ready/start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no more player slots available")]
    NoPlayerSlotsAvailable,

    #[error("{0} is not present in the game")]
    PlayerNotPresent(PlayerId),

    #[error("not all players are ready")]
    PlayersNotReady,

    #[error("game already started")]
    GameAlreadyStarted,
}

/// Failures while building a game from a configuration and a deck.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("not enough cards to deal: {0}")]
    Deck(#[from] DeckError),

    #[error("dealing overflowed a stack: {0}")]
    Stack(#[from] StackError),
}

/// A rejected grab, drop or discard.
///
/// These are soft failures: the game state is left consistent and play
/// continues. A rejected grab changes nothing. A drop onto a stack that does
/// not exist changes nothing either. Every other drop rejection has already
/// taken the card out of the player's hand, and carries a `discarded` flag
/// telling whether the card was lost or handed back (see
/// [`IllegalMove::lost_card`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    /// Intents are only honoured while the game is in play.
    #[error("game is not in play ({0:?})")]
    NotInPlay(Phase),

    #[error("{0} is not present in the game")]
    PlayerNotPresent(PlayerId),

    #[error("already holding {0}")]
    AlreadyHolding(Card),

    #[error("not holding anything")]
    NotHolding,

    /// The index is out of range for the stack kind.
    #[error("no such stack: {0}")]
    NoSuchStack(StackTarget),

    #[error("cannot grab from {0}")]
    NotGrabbable(StackTarget),

    #[error("{0} is empty")]
    StackEmpty(StackTarget),

    #[error("cannot drop onto {target}")]
    NotDroppable { target: StackTarget, discarded: bool },

    /// An empty center stack has no top card to match.
    #[error("nothing to match on {target}")]
    CenterEmpty { target: StackTarget, discarded: bool },

    #[error("{card} is not next to {top}")]
    NotAdjacent {
        card: Card,
        top: Card,
        discarded: bool,
    },
}

impl IllegalMove {
    /// Whether the rejection cost the player the card they were holding.
    #[must_use]
    pub fn lost_card(&self) -> bool {
        match self {
            IllegalMove::NotDroppable { discarded, .. }
            | IllegalMove::CenterEmpty { discarded, .. }
            | IllegalMove::NotAdjacent { discarded, .. } => *discarded,
            _ => false,
        }
    }
}

impl From<HoldError> for IllegalMove {
    fn from(err: HoldError) -> Self {
        match err {
            HoldError::AlreadyHolding(card) => IllegalMove::AlreadyHolding(card),
        }
    }
}

/// Errors from the [`SessionRegistry`](crate::sessions::SessionRegistry).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown session {0}")]
    UnknownSession(crate::sessions::SessionId),

    /// A previous holder of the game lock panicked.
    #[error("session {0} lock poisoned")]
    Poisoned(crate::sessions::SessionId),

    #[error(transparent)]
    Setup(#[from] SetupError),
}
