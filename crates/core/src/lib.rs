//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains both game engines and the state machines that own their
//! state. It has **no dependencies** on terminals, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every transition is a plain method call
//! - **Portable**: Can run headless, in a terminal, or behind any other front end
//!
//! # Module Structure
//!
//! - [`board`]: 3x3 tic-tac-toe board and winner detection
//! - [`search`]: minimax with alpha-beta pruning for the automated player
//! - [`tictactoe`]: turn state machine, including automated-move tickets
//! - [`arena`]: one-cell-per-tick snake simulation on a toroidal grid
//! - [`arena_game`]: running / paused / game-over lifecycle for the arena
//! - [`rng`]: seedable RNG owned by each game
//! - [`error`]: search and turn errors
//!
//! # Example
//!
//! ```
//! use game_hub_core::TurnGame;
//! use game_hub_types::{Difficulty, GameMode, GridAction};
//!
//! let mut game = TurnGame::new(12345, GameMode::PvAI, Difficulty::Hard);
//! game.apply_action(GridAction::Place(0));
//!
//! // The engine now owes exactly one move.
//! let ticket = game.pending_ai().unwrap();
//! assert_eq!(game.play_ai_turn(ticket), Ok(4));
//! ```
//!
//! # Timing
//!
//! Nothing here reads a clock. The arena advances one cell per [`ArenaGame::tick`]
//! call; pacing lives in the engine crate's scheduler.

pub mod arena;
pub mod arena_game;
pub mod board;
pub mod error;
pub mod rng;
pub mod search;
pub mod tictactoe;

pub use game_hub_types as types;

// Re-export commonly used types for convenience
pub use arena::{random_free_cell, ArenaState, TickOutcome};
pub use arena_game::ArenaGame;
pub use board::{check_winner, Board, Winner};
pub use error::{SearchError, TurnError};
pub use rng::GameRng;
pub use search::{best_move, optimal_move, AI_PLAYER, HUMAN_PLAYER};
pub use tictactoe::{AiTicket, TurnGame, TurnGameState};
