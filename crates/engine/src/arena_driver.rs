//! Arena driver: the single entry point for one [`ArenaGame`].
//!
//! Input actions and elapsed time both go through `&mut self`, so every
//! state transition is serialized. After each action the scheduler is brought
//! back in line with the game's status:
//!
//! | Transition            | Scheduler                      |
//! |-----------------------|--------------------------------|
//! | reset                 | fresh cadence                  |
//! | Running → Paused      | cancelled                      |
//! | Paused → Running      | fresh cadence (no replay)      |
//! | difficulty change     | new interval, cadence kept     |
//! | Running → GameOver    | cancelled                      |

use tracing::debug;

use crate::scheduler::TickScheduler;
use game_hub_core::{ArenaGame, TickOutcome};
use game_hub_types::{ArenaAction, ArenaStatus, Difficulty};

#[derive(Debug, Clone)]
pub struct ArenaDriver {
    game: ArenaGame,
    scheduler: TickScheduler,
}

impl ArenaDriver {
    pub fn new(seed: u64, difficulty: Difficulty) -> Self {
        Self::from_game(ArenaGame::new(seed, difficulty))
    }

    /// Wrap an existing game; scheduling starts only if it is running
    pub fn from_game(game: ArenaGame) -> Self {
        let interval = game.tick_interval_ms();
        let mut driver = Self {
            game,
            scheduler: TickScheduler::new(interval),
        };
        if driver.game.status() == ArenaStatus::Running {
            driver.scheduler.start(interval);
        }
        driver
    }

    pub fn game(&self) -> &ArenaGame {
        &self.game
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    /// Apply one input action. Returns true when the game state changed.
    pub fn handle(&mut self, action: ArenaAction) -> bool {
        let before = self.game.status();
        let changed = self.game.apply_action(action);
        if !changed {
            return false;
        }

        match action {
            ArenaAction::Reset => {
                self.scheduler.start(self.game.tick_interval_ms());
            }
            ArenaAction::TogglePause => match self.game.status() {
                ArenaStatus::Paused => self.scheduler.cancel(),
                ArenaStatus::Running if before == ArenaStatus::Paused => {
                    self.scheduler.start(self.game.tick_interval_ms());
                }
                _ => {}
            },
            ArenaAction::SetDifficulty(difficulty) => {
                debug!(?difficulty, "arena cadence changed");
                self.scheduler.set_interval(self.game.tick_interval_ms());
            }
            ArenaAction::Turn(_) => {}
        }
        true
    }

    /// Report elapsed wall time. Runs at most one tick.
    pub fn update(&mut self, elapsed_ms: u32) -> TickOutcome {
        if !self.scheduler.advance(elapsed_ms) {
            return TickOutcome::Idle;
        }
        let outcome = self.game.tick();
        if matches!(outcome, TickOutcome::Collided | TickOutcome::Filled) {
            self.scheduler.cancel();
        }
        outcome
    }

    /// Milliseconds the caller may wait before the next tick is due
    pub fn next_deadline_ms(&self) -> Option<u32> {
        self.scheduler.remaining_ms()
    }
}
