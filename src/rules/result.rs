//! Win detection.
//!
//! A player wins the instant their personal piles are collectively empty.
//! Both seats are checked independently; if both are empty at the same
//! time the game is a draw rather than a win for whoever is checked first.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Winner(PlayerId),
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Judge the table from each seat's remaining personal-pile card count.
///
/// Returns `None` while both players still have cards.
#[must_use]
pub fn judge(cards_left: &PlayerMap<usize>) -> Option<GameResult> {
    let finished: Vec<PlayerId> = cards_left
        .iter()
        .filter(|(_, left)| **left == 0)
        .map(|(player, _)| player)
        .collect();

    match finished.as_slice() {
        [] => None,
        [winner] => Some(GameResult::Winner(*winner)),
        _ => Some(GameResult::Draw),
    }
}
