//! Running games keyed by session.
//!
//! Each game sits behind its own `Mutex`, so every intent, timer tick or
//! network message touching a session runs to completion before the next
//! one starts. The registry hands out `Arc` clones; a caller may hold a
//! game handle after the session has been removed from the registry.
//!
//! ```
//! use speed_engine::core::{GameConfig, Player};
//! use speed_engine::sessions::SessionRegistry;
//!
//! let mut registry = SessionRegistry::new(42);
//! let id = registry.create(GameConfig::default()).unwrap();
//!
//! let seat = registry
//!     .with_game(id, |game| game.join(Player::new("Nobody")))
//!     .unwrap();
//! assert!(seat.is_ok());
//! ```

use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Deck;
use crate::core::{GameConfig, GameRng};
use crate::error::RegistryError;
use crate::games::speed::Game;

/// Identifier of a session in a [`SessionRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A game shared between the threads driving one session.
pub type SharedGame = Arc<Mutex<Game>>;

/// Open sessions and the RNG their decks are shuffled from.
#[derive(Debug)]
pub struct SessionRegistry {
    games: FxHashMap<SessionId, SharedGame>,
    next_id: u64,
    rng: GameRng,
}

impl SessionRegistry {
    /// Create an empty registry whose decks derive from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            games: FxHashMap::default(),
            next_id: 1,
            rng: GameRng::new(seed),
        }
    }

    /// Deal a freshly shuffled game and open a session for it.
    pub fn create(&mut self, config: GameConfig) -> Result<SessionId, RegistryError> {
        let mut rng = self.rng.fork();
        let deck = Deck::shuffled(config.wildcards, &mut rng);
        let game = Game::with_config(config, deck)?;
        Ok(self.insert(game))
    }

    /// Open a session for an already dealt game.
    pub fn insert(&mut self, game: Game) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.games.insert(id, Arc::new(Mutex::new(game)));
        log::info!("opened session {}", id);
        id
    }

    /// A handle to the session's game.
    pub fn get(&self, id: SessionId) -> Result<SharedGame, RegistryError> {
        self.games
            .get(&id)
            .cloned()
            .ok_or(RegistryError::UnknownSession(id))
    }

    /// Run `f` with the session's game locked.
    pub fn with_game<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut Game) -> R,
    ) -> Result<R, RegistryError> {
        let shared = self
            .games
            .get(&id)
            .ok_or(RegistryError::UnknownSession(id))?;
        let mut game = shared.lock().map_err(|_| RegistryError::Poisoned(id))?;
        Ok(f(&mut game))
    }

    /// Close a session, returning its game handle.
    pub fn remove(&mut self, id: SessionId) -> Result<SharedGame, RegistryError> {
        self.games
            .remove(&id)
            .inspect(|_| log::info!("closed session {}", id))
            .ok_or(RegistryError::UnknownSession(id))
    }

    #[must_use]
    pub fn contains(&self, id: SessionId) -> bool {
        self.games.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Open session ids in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.games.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
