//! Players, seats and per-seat storage.
//!
//! ## PlayerId
//!
//! A game has exactly two seats. `PlayerId(0)` is the first player to join
//! (P1), `PlayerId(1)` the second (P2). A `PlayerId` is the identity a
//! caller uses for every later ready/grab/drop call.
//!
//! ## Player
//!
//! A name plus the holding slot: the single card currently in hand.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a `Vec` with O(1) indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::Card;
use crate::error::HoldError;

/// Number of seats at a Speed table.
pub const SEAT_COUNT: usize = 2;

/// Seat identifier. `PlayerId(0)` is P1, `PlayerId(1)` is P2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub const P1: PlayerId = PlayerId(0);
    pub const P2: PlayerId = PlayerId(1);

    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self.0 {
            0 => PlayerId::P2,
            _ => PlayerId::P1,
        }
    }

    /// Both seats in join order.
    ///
    /// ```
    /// use speed_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(seats, vec![PlayerId::P1, PlayerId::P2]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..SEAT_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// A card in hand, remembering which personal pile it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldCard {
    pub card: Card,
    /// Index of the personal pile the card was grabbed from.
    pub origin: usize,
}

/// A participant: a name and a single-card holding slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    holding: Option<HeldCard>,
}

impl Player {
    /// Create a player with empty hands.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holding: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The card currently in hand, if any.
    #[must_use]
    pub fn holding(&self) -> Option<Card> {
        self.holding.map(|held| held.card)
    }

    #[must_use]
    pub fn held(&self) -> Option<HeldCard> {
        self.holding
    }

    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.holding.is_some()
    }

    /// Take `card` into the empty holding slot.
    pub fn grab_into(&mut self, card: Card, origin: usize) -> Result<(), HoldError> {
        if let Some(held) = self.holding {
            return Err(HoldError::AlreadyHolding(held.card));
        }
        self.holding = Some(HeldCard { card, origin });
        Ok(())
    }

    /// Empty the holding slot, returning what was in it.
    pub fn release_held(&mut self) -> Option<HeldCard> {
        self.holding.take()
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use speed_engine::core::{PlayerId, PlayerMap};
///
/// let mut ready: PlayerMap<bool> = PlayerMap::with_value(false);
/// ready[PlayerId::P2] = true;
/// assert!(!ready[PlayerId::P1]);
/// assert!(ready[PlayerId::P2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all().map(factory).collect(),
        }
    }

    /// Create a PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(v: u8) -> Card {
        Card::numbered(v).unwrap()
    }

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::P1.index(), 0);
        assert_eq!(PlayerId::P2.index(), 1);
        assert_eq!(PlayerId::P1.opponent(), PlayerId::P2);
        assert_eq!(PlayerId::P2.opponent(), PlayerId::P1);
        assert_eq!(format!("{}", PlayerId::P1), "Player 1");
    }

    #[test]
    fn test_holding_starts_empty() {
        let player = Player::new("Nobody");
        assert_eq!(player.name(), "Nobody");
        assert!(!player.is_holding());
        assert_eq!(player.holding(), None);
    }

    #[test]
    fn test_grab_into_rejects_second_card() {
        let mut player = Player::new("Nobody");
        player.grab_into(card(5), 0).unwrap();

        assert_eq!(
            player.grab_into(card(6), 1),
            Err(HoldError::AlreadyHolding(card(5)))
        );
        assert_eq!(player.held(), Some(HeldCard { card: card(5), origin: 0 }));
    }

    #[test]
    fn test_release_held() {
        let mut player = Player::new("Somebody");
        player.grab_into(card(9), 3).unwrap();

        assert_eq!(player.release_held(), Some(HeldCard { card: card(9), origin: 3 }));
        assert_eq!(player.release_held(), None);
        assert!(!player.is_holding());
    }

    #[test]
    fn test_player_map() {
        let mut map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);
        assert_eq!(map[PlayerId::P1], 0);
        assert_eq!(map[PlayerId::P2], 10);

        map[PlayerId::P1] = 5;
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::P1, &5), (PlayerId::P2, &10)]);

        assert!(map.get(PlayerId::new(2)).is_none());
    }

    #[test]
    fn test_player_map_with_default() {
        let map: PlayerMap<Vec<i32>> = PlayerMap::with_default();
        assert!(map[PlayerId::P1].is_empty());
        assert!(map[PlayerId::P2].is_empty());
    }
}
