//! Tic-tac-toe state machine
//!
//! [`TurnGameState`] is the plain state plus its pure transitions
//! (`place_mark`, `reset`). [`TurnGame`] owns one state, its RNG, and the
//! bookkeeping for the automated player:
//!
//! - After every transition, if the game is still playing in `PvAI` mode
//!   with O to move, exactly one [`AiTicket`] becomes pending.
//! - While a ticket is pending, human input is ignored.
//! - The move is only applied through [`TurnGame::play_ai_turn`] with the
//!   matching ticket; resets and mode switches invalidate older tickets.
//!
//! States: `Playing → Won`, `Playing → Draw` (both terminal), and
//! `Playing → Playing` on a non-terminal move.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{check_winner, Board};
use crate::error::TurnError;
use crate::rng::GameRng;
use crate::search::{best_move, AI_PLAYER};
use crate::types::{Difficulty, GameMode, GameStatus, GridAction, Player, WinLine};

/// Complete tic-tac-toe state, as read by the presentation layer
///
/// Invariants:
/// - `Won` ⇒ `winner` and `winning_line` are set
/// - `Draw` ⇒ no winner and the board is full
/// - `Playing` ⇒ at least one empty cell and no completed line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnGameState {
    pub board: Board,
    pub current_player: Player,
    pub status: GameStatus,
    pub winner: Option<Player>,
    pub winning_line: Option<WinLine>,
    pub mode: GameMode,
    pub difficulty: Difficulty,
}

impl TurnGameState {
    /// Empty board, X to move
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::Playing,
            winner: None,
            winning_line: None,
            mode,
            difficulty,
        }
    }

    /// Mark `cell` for the player to move.
    ///
    /// Returns false (state untouched) when the cell is occupied or out of
    /// range, or when the game has already ended.
    pub fn place_mark(&mut self, cell: usize) -> bool {
        if self.status != GameStatus::Playing || !self.board.is_empty_at(cell) {
            return false;
        }

        self.board.set(cell, Some(self.current_player));

        if let Some(winner) = check_winner(&self.board) {
            self.status = GameStatus::Won;
            self.winner = Some(winner.player);
            self.winning_line = Some(winner.line);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = self.current_player.opponent();
        }

        true
    }

    /// Back to the initial state, keeping mode and difficulty
    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.difficulty);
    }

    /// True when the engine owes the next move
    pub fn ai_to_move(&self) -> bool {
        self.status == GameStatus::Playing
            && self.mode == GameMode::PvAI
            && self.current_player == AI_PLAYER
    }

    /// Marks placed so far
    pub fn ply(&self) -> u8 {
        (self.board.count(Player::X) + self.board.count(Player::O)) as u8
    }

    pub fn is_finished(&self) -> bool {
        self.status != GameStatus::Playing
    }
}

impl Default for TurnGameState {
    fn default() -> Self {
        Self::new(GameMode::default(), Difficulty::default())
    }
}

/// Handle for one scheduled automated move
///
/// Identifies the episode and ply it was issued for, so a ticket that
/// outlives a reset can never be applied to the new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AiTicket {
    episode_id: u32,
    ply: u8,
}

impl AiTicket {
    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn ply(&self) -> u8 {
        self.ply
    }
}

/// Tic-tac-toe state machine (single owner of a [`TurnGameState`])
#[derive(Debug, Clone)]
pub struct TurnGame {
    state: TurnGameState,
    rng: GameRng,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    pending_ai: Option<AiTicket>,
}

impl TurnGame {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64, mode: GameMode, difficulty: Difficulty) -> Self {
        let mut game = Self {
            state: TurnGameState::new(mode, difficulty),
            rng: GameRng::new(seed),
            episode_id: 0,
            pending_ai: None,
        };
        game.schedule_ai();
        game
    }

    pub fn state(&self) -> &TurnGameState {
        &self.state
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The automated move owed by the engine, if any
    pub fn pending_ai(&self) -> Option<AiTicket> {
        self.pending_ai
    }

    /// Human move. Ignored while an automated move is pending.
    pub fn place_mark(&mut self, cell: usize) -> bool {
        if self.pending_ai.is_some() {
            return false;
        }
        if !self.state.place_mark(cell) {
            return false;
        }
        self.after_move();
        true
    }

    /// Run the search for a pending ticket and apply its move.
    ///
    /// Returns the cell that was marked.
    pub fn play_ai_turn(&mut self, ticket: AiTicket) -> Result<usize, TurnError> {
        match self.pending_ai {
            None => return Err(TurnError::NoPendingTurn),
            Some(pending) if pending != ticket => {
                return Err(TurnError::StaleTicket {
                    ticket_episode: ticket.episode_id,
                    ticket_ply: ticket.ply,
                })
            }
            Some(_) => {}
        }

        let cell = best_move(&self.state.board, self.state.difficulty, &mut self.rng)?;
        self.pending_ai = None;
        let placed = self.state.place_mark(cell);
        debug_assert!(placed, "search returned occupied cell {cell}");
        self.after_move();
        Ok(cell)
    }

    /// Fresh board with the same mode and difficulty; cancels a pending move
    pub fn reset(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.state.reset();
        self.pending_ai = None;
        debug!(episode_id = self.episode_id, "tic-tac-toe reset");
        self.schedule_ai();
    }

    /// Switch who plays O without touching the board
    pub fn set_mode(&mut self, mode: GameMode) -> bool {
        if self.state.mode == mode {
            return false;
        }
        self.state.mode = mode;
        self.schedule_ai();
        true
    }

    /// Takes effect on the next automated move, including a pending one
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.state.difficulty == difficulty {
            return false;
        }
        self.state.difficulty = difficulty;
        true
    }

    /// Apply an input event
    pub fn apply_action(&mut self, action: GridAction) -> bool {
        match action {
            GridAction::Place(cell) => self.place_mark(cell),
            GridAction::Reset => {
                self.reset();
                true
            }
            GridAction::SetMode(mode) => self.set_mode(mode),
            GridAction::SetDifficulty(difficulty) => self.set_difficulty(difficulty),
        }
    }

    fn after_move(&mut self) {
        match self.state.status {
            GameStatus::Won => info!(
                winner = ?self.state.winner,
                line = ?self.state.winning_line,
                "tic-tac-toe won"
            ),
            GameStatus::Draw => info!("tic-tac-toe drawn"),
            GameStatus::Playing => {}
        }
        self.schedule_ai();
    }

    /// Keep `pending_ai` in sync with the state: one ticket exactly when the
    /// engine is owed a move, none otherwise.
    fn schedule_ai(&mut self) {
        if !self.state.ai_to_move() {
            self.pending_ai = None;
            return;
        }
        let ticket = AiTicket {
            episode_id: self.episode_id,
            ply: self.state.ply(),
        };
        if self.pending_ai != Some(ticket) {
            debug!(episode_id = ticket.episode_id, ply = ticket.ply, "automated move scheduled");
            self.pending_ai = Some(ticket);
        }
    }
}

impl Default for TurnGame {
    fn default() -> Self {
        Self::new(1, GameMode::default(), Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvp() -> TurnGame {
        TurnGame::new(12345, GameMode::PvP, Difficulty::Hard)
    }

    #[test]
    fn test_new_state() {
        let state = TurnGameState::new(GameMode::PvAI, Difficulty::Easy);
        assert_eq!(state.board, Board::new());
        assert_eq!(state.current_player, Player::X);
        assert_eq!(state.status, GameStatus::Playing);
        assert!(state.winner.is_none());
        assert!(state.winning_line.is_none());
    }

    #[test]
    fn test_place_mark_flips_player() {
        let mut state = TurnGameState::default();
        assert!(state.place_mark(4));
        assert_eq!(state.board.get(4), Some(Player::X));
        assert_eq!(state.current_player, Player::O);
    }

    #[test]
    fn test_place_mark_rejects_occupied_and_out_of_range() {
        let mut state = TurnGameState::default();
        assert!(state.place_mark(0));
        let before = state.clone();
        assert!(!state.place_mark(0));
        assert!(!state.place_mark(9));
        assert_eq!(state, before);
    }

    #[test]
    fn test_win_keeps_winner_to_move_and_freezes_board() {
        let mut state = TurnGameState::new(GameMode::PvP, Difficulty::Normal);
        for cell in [0, 3, 1, 4, 2] {
            assert!(state.place_mark(cell));
        }
        assert_eq!(state.status, GameStatus::Won);
        assert_eq!(state.winner, Some(Player::X));
        assert_eq!(state.winning_line, Some([0, 1, 2]));

        let frozen = state.clone();
        assert!(!state.place_mark(8));
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_draw_on_full_board() {
        let mut state = TurnGameState::new(GameMode::PvP, Difficulty::Normal);
        // X O X / X O O / O X X
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            assert!(state.place_mark(cell));
        }
        assert_eq!(state.status, GameStatus::Draw);
        assert!(state.winner.is_none());
        assert!(state.board.is_full());
    }

    #[test]
    fn test_reset_keeps_mode_and_difficulty() {
        let mut state = TurnGameState::new(GameMode::PvP, Difficulty::Hard);
        state.place_mark(0);
        state.reset();
        assert_eq!(state, TurnGameState::new(GameMode::PvP, Difficulty::Hard));
    }

    #[test]
    fn test_game_reports_its_seed() {
        let game = TurnGame::new(42, GameMode::PvAI, Difficulty::Hard);
        assert_eq!(game.seed(), 42);
    }

    #[test]
    fn test_pvp_never_schedules_ai() {
        let mut game = pvp();
        assert!(game.place_mark(0));
        assert_eq!(game.state().current_player, Player::O);
        assert!(game.pending_ai().is_none());
        assert!(game.place_mark(1));
    }

    #[test]
    fn test_pvai_schedules_one_ticket_and_blocks_human() {
        let mut game = TurnGame::new(1, GameMode::PvAI, Difficulty::Hard);
        assert!(game.pending_ai().is_none());
        assert!(game.place_mark(0));

        let ticket = game.pending_ai().expect("O to move");
        assert_eq!(ticket.ply(), 1);
        assert!(!game.place_mark(1), "human cannot move for O");

        assert_eq!(game.play_ai_turn(ticket), Ok(4));
        assert!(game.pending_ai().is_none());
        assert_eq!(game.state().current_player, Player::X);
        assert_eq!(game.play_ai_turn(ticket), Err(TurnError::NoPendingTurn));
    }

    #[test]
    fn test_reset_invalidates_ticket() {
        let mut game = TurnGame::new(1, GameMode::PvAI, Difficulty::Hard);
        game.place_mark(0);
        let ticket = game.pending_ai().unwrap();

        game.reset();
        assert_eq!(game.episode_id(), 1);
        assert!(game.pending_ai().is_none());
        assert_eq!(game.play_ai_turn(ticket), Err(TurnError::NoPendingTurn));

        // Same position in the new episode issues a different ticket.
        game.place_mark(0);
        let fresh = game.pending_ai().unwrap();
        assert_ne!(fresh, ticket);
        assert!(matches!(
            game.play_ai_turn(ticket),
            Err(TurnError::StaleTicket { ticket_episode: 0, .. })
        ));
        assert!(game.play_ai_turn(fresh).is_ok());
    }

    #[test]
    fn test_mode_switch_schedules_and_cancels() {
        let mut game = pvp();
        game.place_mark(0);
        assert!(game.pending_ai().is_none());

        assert!(game.set_mode(GameMode::PvAI));
        assert!(game.pending_ai().is_some());

        assert!(game.set_mode(GameMode::PvP));
        assert!(game.pending_ai().is_none());
        assert!(!game.set_mode(GameMode::PvP));
    }

    #[test]
    fn test_difficulty_change_keeps_pending_ticket() {
        let mut game = TurnGame::new(3, GameMode::PvAI, Difficulty::Easy);
        game.place_mark(8);
        let ticket = game.pending_ai().unwrap();
        assert!(game.set_difficulty(Difficulty::Hard));
        assert_eq!(game.pending_ai(), Some(ticket));
        assert_eq!(game.state().difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_apply_action_routes() {
        let mut game = pvp();
        assert!(game.apply_action(GridAction::Place(2)));
        assert!(game.apply_action(GridAction::SetDifficulty(Difficulty::Easy)));
        assert!(game.apply_action(GridAction::Reset));
        assert_eq!(game.state().board, Board::new());
        assert_eq!(game.state().difficulty, Difficulty::Easy);
        assert_eq!(game.state().mode, GameMode::PvP);
    }
}
