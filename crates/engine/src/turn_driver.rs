//! Tic-tac-toe driver: single entry point for one [`TurnGame`].
//!
//! The driver holds on to the pending [`AiTicket`] and fires it once
//! `AI_MOVE_DELAY_MS` of reported time has passed. A reset or a switch to
//! `PvP` drops the ticket in the game, and the next sync drops it here too,
//! so a cancelled move can never land on a fresh board.

use tracing::debug;

use game_hub_core::{AiTicket, TurnError, TurnGame};
use game_hub_types::{Difficulty, GameMode, GridAction, AI_MOVE_DELAY_MS, END_SCREEN_DELAY_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ArmedTurn {
    ticket: AiTicket,
    waited_ms: u32,
}

#[derive(Debug, Clone)]
pub struct TurnDriver {
    game: TurnGame,
    armed: Option<ArmedTurn>,
    /// Time since the game reached a terminal state
    finished_ms: Option<u32>,
}

impl TurnDriver {
    pub fn new(seed: u64, mode: GameMode, difficulty: Difficulty) -> Self {
        Self::from_game(TurnGame::new(seed, mode, difficulty))
    }

    pub fn from_game(game: TurnGame) -> Self {
        let mut driver = Self {
            game,
            armed: None,
            finished_ms: None,
        };
        driver.sync();
        driver
    }

    pub fn game(&self) -> &TurnGame {
        &self.game
    }

    /// True while an automated move is counting down
    pub fn ai_thinking(&self) -> bool {
        self.armed.is_some()
    }

    /// Apply one input action. Returns true when the game state changed.
    pub fn handle(&mut self, action: GridAction) -> bool {
        let changed = self.game.apply_action(action);
        self.sync();
        changed
    }

    /// Report elapsed wall time.
    ///
    /// Returns the cell the automated player marked, if its delay ran out
    /// during this call.
    pub fn update(&mut self, elapsed_ms: u32) -> Result<Option<usize>, TurnError> {
        if let Some(finished) = self.finished_ms.as_mut() {
            *finished = finished.saturating_add(elapsed_ms);
        }

        let Some(armed) = self.armed.as_mut() else {
            return Ok(None);
        };
        armed.waited_ms = armed.waited_ms.saturating_add(elapsed_ms);
        if armed.waited_ms < AI_MOVE_DELAY_MS {
            return Ok(None);
        }

        let ticket = armed.ticket;
        self.armed = None;
        let cell = self.game.play_ai_turn(ticket)?;
        debug!(cell, episode_id = ticket.episode_id(), "automated move applied");
        self.sync();
        Ok(Some(cell))
    }

    /// Winner / draw banner is due
    pub fn end_screen_visible(&self) -> bool {
        self.finished_ms
            .is_some_and(|ms| ms >= END_SCREEN_DELAY_MS)
    }

    fn sync(&mut self) {
        match (self.game.pending_ai(), self.armed) {
            (None, _) => self.armed = None,
            (Some(ticket), Some(armed)) if armed.ticket == ticket => {}
            (Some(ticket), _) => {
                self.armed = Some(ArmedTurn {
                    ticket,
                    waited_ms: 0,
                })
            }
        }

        if !self.game.state().is_finished() {
            self.finished_ms = None;
        } else if self.finished_ms.is_none() {
            self.finished_ms = Some(0);
        }
    }
}
