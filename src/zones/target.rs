//! Addressing the stacks on the table.
//!
//! A grab or drop names one stack by kind and zero-based index. The index is
//! relative to the acting player: `Own(2)` is the third personal pile of
//! whoever is acting, `Opponent(2)` the matching pile of the other player.

use serde::{Deserialize, Serialize};

/// Which collection of stacks an intent targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackKind {
    /// Shared drop targets.
    Center,
    /// Shared reserve stacks.
    Side,
    /// The acting player's personal piles.
    Own,
    /// The other player's personal piles.
    Opponent,
}

impl StackKind {
    pub const ALL: [StackKind; 4] = [
        StackKind::Center,
        StackKind::Side,
        StackKind::Own,
        StackKind::Opponent,
    ];
}

/// A single stack: kind plus zero-based index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackTarget {
    Center(usize),
    Side(usize),
    Own(usize),
    Opponent(usize),
}

impl StackTarget {
    /// Build a target from a kind and an index.
    #[must_use]
    pub const fn new(kind: StackKind, index: usize) -> Self {
        match kind {
            StackKind::Center => StackTarget::Center(index),
            StackKind::Side => StackTarget::Side(index),
            StackKind::Own => StackTarget::Own(index),
            StackKind::Opponent => StackTarget::Opponent(index),
        }
    }

    #[must_use]
    pub const fn kind(self) -> StackKind {
        match self {
            StackTarget::Center(_) => StackKind::Center,
            StackTarget::Side(_) => StackKind::Side,
            StackTarget::Own(_) => StackKind::Own,
            StackTarget::Opponent(_) => StackKind::Opponent,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            StackTarget::Center(i)
            | StackTarget::Side(i)
            | StackTarget::Own(i)
            | StackTarget::Opponent(i) => i,
        }
    }
}

impl std::fmt::Display for StackTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StackTarget::Center(i) => write!(f, "center stack {}", i),
            StackTarget::Side(i) => write!(f, "side stack {}", i),
            StackTarget::Own(i) => write!(f, "own stack {}", i),
            StackTarget::Opponent(i) => write!(f, "opponent stack {}", i),
        }
    }
}
