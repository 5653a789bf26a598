//! Deterministic random number generation for deck preparation.
//!
//! The engine itself never draws random numbers. Randomness is only used to
//! shuffle a card list before it becomes a [`Deck`](crate::cards::Deck), so
//! a seed fully determines a deal.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces an identical shuffle
//! - **Forkable**: Independent, reproducible streams (one per session)
//!
//! ```
//! use speed_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut a = vec![1, 2, 3, 4, 5, 6];
//! rng.shuffle(&mut a);
//!
//! let mut again = GameRng::new(42);
//! let mut b = vec![1, 2, 3, 4, 5, 6];
//! again.shuffle(&mut b);
//!
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used to shuffle decks.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent stream.
    ///
    /// Each fork gets a different but deterministic seed, so the n-th fork
    /// of a given seed always shuffles the same way.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
