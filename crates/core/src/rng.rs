//! RNG module - deterministic, seedable randomness
//!
//! Every random decision in the hub (random fallback moves of the automated
//! tic-tac-toe player, food placement in the arena) draws from a [`GameRng`]
//! owned by the game that needs it. Nothing reaches for thread-local or
//! global randomness, so the same seed always replays the same game.
//!
//! Engine functions stay generic over [`rand::Rng`]; `GameRng` is simply the
//! generator the state machines own.

use rand::{Error, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable game RNG (ChaCha8 stream)
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.inner.try_fill_bytes(dest)
    }
}
