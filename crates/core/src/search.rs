//! Search module - adversarial move selection for the automated player
//!
//! The automated player always plays O. Moves are chosen by full-depth
//! minimax with alpha-beta pruning; easier difficulties mix in uniformly
//! random moves before the search runs.
//!
//! # Scoring
//!
//! Terminal positions are scored from O's point of view, where `depth` counts
//! plies below the candidate root move:
//!
//! | Outcome | Score |
//! |---------|-------|
//! | O wins | `10 - depth` |
//! | X wins | `depth - 10` |
//! | Draw | `0` |
//!
//! Faster wins score higher and slower losses score less badly, so the
//! engine never delays a win or hurries a loss.
//!
//! # Tie-breaks
//!
//! Candidate moves are always visited in ascending cell index; the first
//! maximal (or minimal) value wins. This decides which cell is returned among
//! equal-scoring moves, and pruning never changes it.

use rand::Rng;
use tracing::{debug, trace};

use crate::board::{check_winner, Board};
use crate::error::SearchError;
use crate::types::{Difficulty, Player, BOARD_CELLS};

/// The side played by the engine
pub const AI_PLAYER: Player = Player::O;

/// The side played by the human in `PvAI` mode
pub const HUMAN_PLAYER: Player = Player::X;

/// Base score of a win, reduced by depth
const WIN_SCORE: i32 = 10;

/// Initial alpha/beta window; wider than any reachable score
const SCORE_BOUND: i32 = 1000;

/// Choose O's next move on `board`.
///
/// The difficulty policy runs first: `Easy` plays a uniformly random empty
/// cell with probability 0.7, `Normal` with probability 0.3, `Hard` never
/// does (and draws nothing from `rng`). Otherwise the full search decides.
///
/// Fails with [`SearchError::PreconditionViolation`] when the board has no
/// empty cell.
///
/// # Examples
///
/// ```
/// use game_hub_core::{best_move, Board, GameRng};
/// use game_hub_types::Difficulty;
///
/// let mut rng = GameRng::new(1);
/// let board = Board::parse("X........").unwrap();
/// // Against a corner opening only the center holds the draw.
/// assert_eq!(best_move(&board, Difficulty::Hard, &mut rng), Ok(4));
/// ```
pub fn best_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize, SearchError> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return Err(SearchError::PreconditionViolation(
            "best_move requires at least one empty cell",
        ));
    }

    let chance = difficulty.random_move_chance();
    if chance > 0.0 && rng.gen_bool(chance) {
        let cell = empty[rng.gen_range(0..empty.len())];
        debug!(difficulty = difficulty.as_str(), cell, "random fallback move");
        return Ok(cell);
    }

    let (cell, score) = optimal_move(board).ok_or(SearchError::PreconditionViolation(
        "search found no candidate move",
    ))?;
    debug!(difficulty = difficulty.as_str(), cell, score, "searched move");
    Ok(cell)
}

/// Full-depth alpha-beta search for O, ignoring difficulty.
///
/// Returns the chosen cell and its minimax score, or `None` on a full board.
/// Each root candidate is searched with a full window, so the reported score
/// is exact.
pub fn optimal_move(board: &Board) -> Option<(usize, i32)> {
    let mut scratch = *board;
    let mut best: Option<(usize, i32)> = None;

    for cell in board.empty_cells() {
        scratch.set(cell, Some(AI_PLAYER));
        let value = minimax(&mut scratch, 0, false, -SCORE_BOUND, SCORE_BOUND);
        scratch.set(cell, None);
        trace!(cell, value, "root candidate");

        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((cell, value));
        }
    }

    best
}

/// Score of a finished position, `None` while play continues
pub(crate) fn terminal_score(board: &Board, depth: i32) -> Option<i32> {
    match check_winner(board) {
        Some(winner) if winner.player == AI_PLAYER => Some(WIN_SCORE - depth),
        Some(_) => Some(depth - WIN_SCORE),
        None if board.is_full() => Some(0),
        None => None,
    }
}

fn minimax(board: &mut Board, depth: i32, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
    if let Some(score) = terminal_score(board, depth) {
        return score;
    }

    if maximizing {
        let mut best = -SCORE_BOUND;
        for cell in 0..BOARD_CELLS {
            if !board.is_empty_at(cell) {
                continue;
            }
            board.set(cell, Some(AI_PLAYER));
            best = best.max(minimax(board, depth + 1, false, alpha, beta));
            board.set(cell, None);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = SCORE_BOUND;
        for cell in 0..BOARD_CELLS {
            if !board.is_empty_at(cell) {
                continue;
            }
            board.set(cell, Some(HUMAN_PLAYER));
            best = best.min(minimax(board, depth + 1, true, alpha, beta));
            board.set(cell, None);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
