//! Arena state machine
//!
//! Owns one [`ArenaState`] and the RNG used for food placement.
//!
//! States: `Running ⇄ Paused` via [`ArenaGame::toggle_pause`];
//! `Running → GameOver` only through a colliding (or grid-filling) tick.
//! [`ArenaGame::reset`] returns to `Running` from any state.

use tracing::debug;

use crate::arena::{ArenaState, TickOutcome};
use crate::rng::GameRng;
use crate::types::{ArenaAction, ArenaStatus, Difficulty, Direction};

#[derive(Debug, Clone)]
pub struct ArenaGame {
    state: ArenaState,
    rng: GameRng,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
}

impl ArenaGame {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64, difficulty: Difficulty) -> Self {
        let mut rng = GameRng::new(seed);
        let state = ArenaState::new(difficulty, 0, &mut rng);
        Self {
            state,
            rng,
            episode_id: 0,
        }
    }

    /// Resume from an existing state (replays, scripted scenarios)
    pub fn from_state(state: ArenaState, seed: u64) -> Self {
        Self {
            state,
            rng: GameRng::new(seed),
            episode_id: 0,
        }
    }

    pub fn state(&self) -> &ArenaState {
        &self.state
    }

    pub fn status(&self) -> ArenaStatus {
        self.state.status()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Scheduling cadence for the current difficulty
    pub fn tick_interval_ms(&self) -> u32 {
        self.state.difficulty.arena_tick_ms()
    }

    /// One simulation step
    pub fn tick(&mut self) -> TickOutcome {
        self.state.tick(&mut self.rng)
    }

    pub fn set_direction(&mut self, direction: Direction) -> bool {
        self.state.set_direction(direction)
    }

    /// Running ⇄ Paused; no-op once the game is over
    pub fn toggle_pause(&mut self) -> bool {
        if self.state.is_over {
            return false;
        }
        self.state.is_paused = !self.state.is_paused;
        debug!(paused = self.state.is_paused, "arena pause toggled");
        true
    }

    /// Fresh body and food, keeping high score and difficulty
    pub fn reset(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.state.reset(&mut self.rng);
        debug!(
            episode_id = self.episode_id,
            high_score = self.state.high_score,
            "arena reset"
        );
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.state.difficulty == difficulty {
            return false;
        }
        self.state.difficulty = difficulty;
        true
    }

    /// Apply an input event
    pub fn apply_action(&mut self, action: ArenaAction) -> bool {
        match action {
            ArenaAction::Turn(direction) => self.set_direction(direction),
            ArenaAction::TogglePause => self.toggle_pause(),
            ArenaAction::Reset => {
                self.reset();
                true
            }
            ArenaAction::SetDifficulty(difficulty) => self.set_difficulty(difficulty),
        }
    }
}

impl Default for ArenaGame {
    fn default() -> Self {
        Self::new(1, Difficulty::default())
    }
}
