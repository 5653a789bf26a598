//! Pointer input to game intents.
//!
//! A presentation layer hit-tests the pointer against sixteen card-sized
//! regions and reports only the region index (or `None` when the pointer is
//! over empty table). The adapter turns press/release pairs into intents:
//!
//! | Regions | Stack              |
//! |---------|--------------------|
//! | 0..=1   | `Center(0..=1)`    |
//! | 2..=3   | `Side(0..=1)`      |
//! | 4..=9   | `Own(0..=5)`       |
//! | 10..=15 | `Opponent(0..=5)`  |
//!
//! Pressing over a region grabs from it and starts a drag. Releasing a drag
//! over a region drops onto it; releasing over empty table discards.
//! Presses over empty table and releases without a drag do nothing.
//!
//! ```
//! use speed_engine::core::{Intent, PlayerId};
//! use speed_engine::input::PointerAdapter;
//! use speed_engine::zones::StackTarget;
//!
//! let mut pointer = PointerAdapter::new();
//! assert_eq!(
//!     pointer.press(PlayerId::P1, Some(4)),
//!     Some(Intent::Grab(StackTarget::Own(0)))
//! );
//! assert_eq!(
//!     pointer.release(PlayerId::P1, Some(1)),
//!     Some(Intent::Drop(StackTarget::Center(1)))
//! );
//! ```

use crate::core::{Intent, Move, PlayerId, PlayerMap};
use crate::error::IllegalMove;
use crate::games::speed::Game;
use crate::zones::{StackKind, StackTarget};

/// Number of hit-test regions on the standard table.
pub const REGION_COUNT: usize = 16;

/// First region of each stack kind, in region order.
const REGION_LAYOUT: [(usize, StackKind); 4] = [
    (0, StackKind::Center),
    (2, StackKind::Side),
    (4, StackKind::Own),
    (10, StackKind::Opponent),
];

/// Map a region index to the stack it covers.
#[must_use]
pub fn region_target(region: usize) -> Option<StackTarget> {
    if region >= REGION_COUNT {
        return None;
    }
    REGION_LAYOUT
        .iter()
        .rev()
        .find(|(first, _)| region >= *first)
        .map(|&(first, kind)| StackTarget::new(kind, region - first))
}

/// Map a stack back to its region index, if it has one.
#[must_use]
pub fn target_region(target: StackTarget) -> Option<usize> {
    let (first, _) = REGION_LAYOUT
        .iter()
        .find(|(_, kind)| *kind == target.kind())?;
    let region = first + target.index();
    (region_target(region) == Some(target)).then_some(region)
}

/// Per-player drag tracking.
#[derive(Clone, Debug)]
pub struct PointerAdapter {
    dragging: PlayerMap<Option<StackTarget>>,
}

impl Default for PointerAdapter {
    fn default() -> Self {
        Self {
            dragging: PlayerMap::with_value(None),
        }
    }
}

impl PointerAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stack `player` started dragging from, if a drag is in progress.
    #[must_use]
    pub fn dragging(&self, player: PlayerId) -> Option<StackTarget> {
        self.dragging.get(player).copied().flatten()
    }

    /// Pointer pressed. Over a region this grabs from it and starts a drag.
    pub fn press(&mut self, player: PlayerId, region: Option<usize>) -> Option<Intent> {
        let target = region.and_then(region_target)?;
        *self.dragging.get_mut(player)? = Some(target);
        log::debug!("{} pressed {}", player, target);
        Some(Intent::Grab(target))
    }

    /// Pointer released. Ends a drag with a drop or a discard.
    pub fn release(&mut self, player: PlayerId, region: Option<usize>) -> Option<Intent> {
        self.dragging.get_mut(player)?.take()?;
        let intent = match region.and_then(region_target) {
            Some(target) => Intent::Drop(target),
            None => Intent::Discard,
        };
        log::debug!("{} released: {:?}", player, intent);
        Some(intent)
    }

    /// [`press`](Self::press) and apply the resulting intent to `game`.
    pub fn press_on(
        &mut self,
        game: &mut Game,
        player: PlayerId,
        region: Option<usize>,
    ) -> Option<Result<Move, IllegalMove>> {
        self.press(player, region)
            .map(|intent| game.apply(player, intent))
    }

    /// [`release`](Self::release) and apply the resulting intent to `game`.
    pub fn release_on(
        &mut self,
        game: &mut Game,
        player: PlayerId,
        region: Option<usize>,
    ) -> Option<Result<Move, IllegalMove>> {
        self.release(player, region)
            .map(|intent| game.apply(player, intent))
    }
}
