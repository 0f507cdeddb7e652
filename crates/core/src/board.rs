//! Board module - the 3x3 tic-tac-toe grid
//!
//! The board is a flat array of 9 cells, row-major: index `row * 3 + col`.
//! It is `Copy`, so the search engine always works on its own scratch copy and
//! never touches the caller's board.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{Cell, Player, WinLine, BOARD_CELLS, WIN_LINES};

/// The tic-tac-toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

/// A completed line and the player who owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Winner {
    pub player: Player,
    pub line: WinLine,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    /// Parse a board from 9 characters: `X`, `O`, and `.`/`-`/`_` for empty.
    ///
    /// Spaces, line breaks and `|` separators are skipped, so both
    /// `"XO..X...O"` and `"XO.|.X.|..O"` are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use game_hub_core::Board;
    /// use game_hub_types::Player;
    ///
    /// let board = Board::parse("X...O....").unwrap();
    /// assert_eq!(board.get(0), Some(Player::X));
    /// assert_eq!(board.get(4), Some(Player::O));
    /// assert!(Board::parse("XX").is_none());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let mut cells = [None; BOARD_CELLS];
        let mut i = 0usize;
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Some(Player::X),
                'O' | 'o' => Some(Player::O),
                '.' | '-' | '_' => None,
                '|' | '\n' | '\r' | ' ' => continue,
                _ => return None,
            };
            if i >= BOARD_CELLS {
                return None;
            }
            cells[i] = cell;
            i += 1;
        }
        (i == BOARD_CELLS).then_some(Self { cells })
    }

    /// Mark at `index`; `None` when empty or out of range
    pub fn get(&self, index: usize) -> Cell {
        self.cells.get(index).copied().flatten()
    }

    /// Write `cell` at `index`
    /// Returns false if out of range
    pub fn set(&mut self, index: usize, cell: Cell) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Check if `index` is on the board and unmarked
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// Empty cell indices in ascending order
    ///
    /// The order is part of the search contract: ties between equally good
    /// moves always go to the lowest index.
    pub fn empty_cells(&self) -> ArrayVec<usize, BOARD_CELLS> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of marks placed by `player`
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }
}

/// First fully-marked line in scan order (rows, columns, diagonals)
///
/// # Examples
///
/// ```
/// use game_hub_core::{check_winner, Board};
/// use game_hub_types::Player;
///
/// let board = Board::parse("OOO.XX..X").unwrap();
/// let winner = check_winner(&board).unwrap();
/// assert_eq!(winner.player, Player::O);
/// assert_eq!(winner.line, [0, 1, 2]);
///
/// assert!(check_winner(&Board::new()).is_none());
/// ```
pub fn check_winner(board: &Board) -> Option<Winner> {
    WIN_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.cells[a] {
            Some(player) if board.cells[b] == Some(player) && board.cells[c] == Some(player) => {
                Some(Winner { player, line })
            }
            _ => None,
        }
    })
}
