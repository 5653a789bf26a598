//! Game lifecycle.
//!
//! `PreGame --start()--> Play --(a player empties their piles)--> PostGame`.
//! Nothing leaves `PostGame`.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players are joining and getting ready.
    #[default]
    PreGame,
    /// Grab and drop intents are honoured.
    Play,
    /// Terminal. Someone won, or both ran out at once.
    PostGame,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::PostGame)
    }

    /// Whether `self -> next` is a legal transition.
    #[must_use]
    pub const fn can_advance_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::PreGame, Phase::Play) | (Phase::Play, Phase::PostGame)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        assert!(Phase::PreGame.can_advance_to(Phase::Play));
        assert!(Phase::Play.can_advance_to(Phase::PostGame));

        assert!(!Phase::PreGame.can_advance_to(Phase::PostGame));
        assert!(!Phase::PostGame.can_advance_to(Phase::Play));
        assert!(!Phase::PostGame.can_advance_to(Phase::PreGame));
        assert!(!Phase::Play.can_advance_to(Phase::Play));
    }

    #[test]
    fn test_terminal() {
        assert_eq!(Phase::default(), Phase::PreGame);
        assert!(Phase::PostGame.is_terminal());
        assert!(!Phase::Play.is_terminal());
    }
}
