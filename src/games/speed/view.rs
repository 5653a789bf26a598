//! Read-only table snapshot for presentation layers.
//!
//! A `TableView` is everything a shell needs to draw the table from one
//! player's side: top cards and sizes of every stack, what the player is
//! holding, the phase and the result. It carries no references into the
//! game, so it can be serialized and sent elsewhere.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Phase, PlayerId};
use crate::rules::GameResult;
use crate::zones::CardStack;

/// Visible part of one stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackView {
    pub top: Option<Card>,
    pub len: usize,
}

impl From<&CardStack> for StackView {
    fn from(stack: &CardStack) -> Self {
        Self {
            top: stack.top().ok(),
            len: stack.len(),
        }
    }
}

/// The table as seen by `viewer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub viewer: PlayerId,
    pub phase: Phase,
    pub holding: Option<Card>,
    pub own: Vec<StackView>,
    pub opponent: Vec<StackView>,
    pub center: Vec<StackView>,
    pub side: Vec<StackView>,
    pub result: Option<GameResult>,
    /// Milliseconds since the game started.
    pub elapsed_ms: u64,
}

impl TableView {
    /// Cards left in the viewer's personal piles.
    #[must_use]
    pub fn own_cards_left(&self) -> usize {
        self.own.iter().map(|s| s.len).sum()
    }

    /// Cards left in the opponent's personal piles.
    #[must_use]
    pub fn opponent_cards_left(&self) -> usize {
        self.opponent.iter().map(|s| s.len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_view_from_stack() {
        let mut stack = CardStack::new(4);
        assert_eq!(StackView::from(&stack), StackView { top: None, len: 0 });

        stack.push(Card::numbered(2).unwrap()).unwrap();
        stack.push(Card::numbered(11).unwrap()).unwrap();
        assert_eq!(
            StackView::from(&stack),
            StackView {
                top: Card::numbered(11),
                len: 2
            }
        );
    }
}
