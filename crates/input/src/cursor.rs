//! Keyboard cursor over the 3x3 board.
//!
//! | Key              | Action                          |
//! |------------------|---------------------------------|
//! | `1`–`9`          | place at that cell (row-major)  |
//! | arrows / WASD    | move the cursor (clamped)       |
//! | Enter / space    | place at the cursor             |
//! | `m`              | toggle PvP / PvAI               |
//! | `e` / `n` / `h`  | Easy / Normal / Hard            |
//! | `r`              | new game                        |

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::map::direction_key;
use crate::types::{Difficulty, Direction, GameMode, GridAction, BOARD_CELLS};

const SIDE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    cell: usize,
}

impl GridCursor {
    /// Cursor on the centre cell
    pub fn new() -> Self {
        Self { cell: 4 }
    }

    pub fn cell(&self) -> usize {
        self.cell
    }

    pub fn move_to(&mut self, cell: usize) {
        if cell < BOARD_CELLS {
            self.cell = cell;
        }
    }

    /// Step one cell, stopping at the board edge
    pub fn step(&mut self, direction: Direction) {
        let (row, col) = (self.cell / SIDE, self.cell % SIDE);
        let (row, col) = match direction {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(SIDE - 1), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(SIDE - 1)),
        };
        self.cell = row * SIDE + col;
    }

    /// Map a key press; cursor moves are absorbed and yield `None`.
    ///
    /// `mode` is the current game mode, so `m` can request the other one.
    pub fn handle_key(&mut self, key: KeyEvent, mode: GameMode) -> Option<GridAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }
        if let Some(direction) = direction_key(key.code) {
            self.step(direction);
            return None;
        }
        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let cell = (c as u8 - b'1') as usize;
                self.move_to(cell);
                Some(GridAction::Place(cell))
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(GridAction::Place(self.cell)),
            KeyCode::Char('m') | KeyCode::Char('M') => Some(GridAction::SetMode(mode.toggled())),
            KeyCode::Char('e') | KeyCode::Char('E') => {
                Some(GridAction::SetDifficulty(Difficulty::Easy))
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                Some(GridAction::SetDifficulty(Difficulty::Normal))
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                Some(GridAction::SetDifficulty(Difficulty::Hard))
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Some(GridAction::Reset),
            _ => None,
        }
    }
}

impl Default for GridCursor {
    fn default() -> Self {
        Self::new()
    }
}
