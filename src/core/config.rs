//! Table configuration.
//!
//! The defaults describe the standard table: six personal piles of four
//! cards per player, two center stacks seeded with one card each, two side
//! stacks of capacity one, and a 54-card deck with two wildcards.
//!
//! ```
//! use speed_engine::core::{GameConfig, IllegalDropPolicy};
//!
//! let config = GameConfig::default()
//!     .with_wildcards(0)
//!     .with_illegal_drop(IllegalDropPolicy::Return);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.deck_size(), 52);
//! assert_eq!(config.cards_required(), 50);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{COPIES_PER_RANK, DEFAULT_WILDCARDS, RANK_COUNT};
use crate::error::SetupError;

/// What happens to the held card when a drop is rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IllegalDropPolicy {
    /// The card is lost and the hand is emptied.
    #[default]
    Discard,
    /// The drop is rejected and the card stays in hand.
    Return,
}

/// Complete table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Personal piles per player.
    pub personal_stacks: usize,

    /// Cards dealt to (and capacity of) each personal pile.
    pub personal_stack_capacity: usize,

    /// Shared drop targets.
    pub center_stacks: usize,

    /// Cards dealt to each center stack at setup.
    pub center_cards: usize,

    /// Shared side stacks.
    pub side_stacks: usize,

    pub side_stack_capacity: usize,

    /// Wildcards in a standard deck built for this table.
    pub wildcards: usize,

    pub illegal_drop: IllegalDropPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            personal_stacks: 6,
            personal_stack_capacity: 4,
            center_stacks: 2,
            center_cards: 1,
            side_stacks: 2,
            side_stack_capacity: 1,
            wildcards: DEFAULT_WILDCARDS,
            illegal_drop: IllegalDropPolicy::Discard,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_personal_stacks(mut self, count: usize, capacity: usize) -> Self {
        self.personal_stacks = count;
        self.personal_stack_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_center_stacks(mut self, count: usize, cards: usize) -> Self {
        self.center_stacks = count;
        self.center_cards = cards;
        self
    }

    #[must_use]
    pub fn with_side_stacks(mut self, count: usize, capacity: usize) -> Self {
        self.side_stacks = count;
        self.side_stack_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_wildcards(mut self, wildcards: usize) -> Self {
        self.wildcards = wildcards;
        self
    }

    #[must_use]
    pub fn with_illegal_drop(mut self, policy: IllegalDropPolicy) -> Self {
        self.illegal_drop = policy;
        self
    }

    /// Size of a standard deck for this configuration.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        RANK_COUNT * COPIES_PER_RANK + self.wildcards
    }

    /// Cards consumed by the initial deal.
    #[must_use]
    pub fn cards_required(&self) -> usize {
        2 * self.personal_stacks * self.personal_stack_capacity
            + self.center_stacks * self.center_cards
    }

    /// Check that a table can be laid out from this configuration.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.personal_stacks == 0 || self.personal_stack_capacity == 0 {
            return Err(SetupError::Config(
                "players need at least one non-empty personal stack".to_string(),
            ));
        }
        if self.center_stacks == 0 {
            return Err(SetupError::Config(
                "at least one center stack is required".to_string(),
            ));
        }
        if self.center_cards == 0 {
            return Err(SetupError::Config(
                "center stacks must be seeded with at least one card".to_string(),
            ));
        }
        Ok(())
    }
}
