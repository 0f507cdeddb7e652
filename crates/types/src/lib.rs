//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by both games of the hub.
//! All types are pure data with no I/O, making them usable in any context
//! (engine logic, scheduling, terminal rendering, JSON export).
//!
//! # Tic-Tac-Toe
//!
//! - **Board**: 9 cells, index 0..8 mapped row-major onto a 3x3 grid
//! - **Lines**: 8 fixed winning triples (3 rows, 3 columns, 2 diagonals)
//! - **Players**: X always opens; the automated opponent plays O
//!
//! # Arena (Snake)
//!
//! - **Grid**: 20x20 toroidal grid (no walls)
//! - **Spawn**: single segment at (10, 10) heading right
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Input poll / render cadence of the terminal loop |
//! | `AI_MOVE_DELAY_MS` | 500 | Delay before the automated player moves |
//! | `END_SCREEN_DELAY_MS` | 1000 | Delay before the tic-tac-toe end banner appears |
//!
//! # Arena Tick Intervals by Difficulty
//!
//! | Difficulty | Interval |
//! |------------|----------|
//! | Easy | 150ms |
//! | Normal | 100ms |
//! | Hard | 70ms |
//!
//! # Examples
//!
//! ```
//! use game_hub_types::{Difficulty, Direction, Player, GRID_SIZE};
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(Player::X.opponent(), Player::O);
//!
//! let hard = Difficulty::from_str("HARD").unwrap();
//! assert_eq!(hard.arena_tick_ms(), 70);
//!
//! assert_eq!(GRID_SIZE, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Number of cells on the tic-tac-toe board
pub const BOARD_CELLS: usize = 9;

/// Arena grid side length in cells
pub const GRID_SIZE: u8 = 20;

/// Terminal loop cadence (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Delay before the automated tic-tac-toe player makes its move
pub const AI_MOVE_DELAY_MS: u32 = 500;

/// Delay before the end banner is shown after a won or drawn game
pub const END_SCREEN_DELAY_MS: u32 = 1000;

/// Arena tick interval per difficulty (Easy, Normal, Hard)
pub const ARENA_TICK_MS: [u32; 3] = [150, 100, 70];

/// Arena spawn cell for the single-segment body
pub const INITIAL_HEAD: Point = Point::new(10, 10);

/// An index triple covering one row, column or diagonal
pub type WinLine = [usize; 3];

/// Winning lines in scan order: rows, then columns, then both diagonals
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_tick_table_matches_difficulty() {
        assert_eq!(Difficulty::Easy.arena_tick_ms(), 150);
        assert_eq!(Difficulty::Normal.arena_tick_ms(), 100);
        assert_eq!(Difficulty::Hard.arena_tick_ms(), 70);
    }

    #[test]
    fn random_move_chance_per_difficulty() {
        assert_eq!(Difficulty::Easy.random_move_chance(), 0.7);
        assert_eq!(Difficulty::Normal.random_move_chance(), 0.3);
        assert_eq!(Difficulty::Hard.random_move_chance(), 0.0);
    }

    #[test]
    fn win_lines_cover_every_cell() {
        for cell in 0..BOARD_CELLS {
            assert!(WIN_LINES.iter().any(|line| line.contains(&cell)));
        }
        // Center sits on 4 lines (row, column, both diagonals).
        assert_eq!(WIN_LINES.iter().filter(|l| l.contains(&4)).count(), 4);
    }

    #[test]
    fn opposites_are_involutive() {
        for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn catalog_lookup() {
        assert_eq!(find_game("snake").map(|g| g.max_players), Some(1));
        assert!(find_game("tictactoe").is_some_and(|g| g.has_bot));
        assert!(find_game("chess").is_none());
    }
}

/// The two tic-tac-toe players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player who moves after this one
    pub fn opponent(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Mark glyph drawn on the board
    pub fn as_char(&self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board
///
/// - `None`: Empty cell
/// - `Some(Player)`: Cell marked by that player
pub type Cell = Option<Player>;

/// Opponent strength, shared by both games
///
/// - Tic-tac-toe: probability of a random move instead of a full search
/// - Arena: tick interval (snake speed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use game_hub_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("Normal"), Some(Difficulty::Normal));
    /// assert_eq!(Difficulty::from_str("insane"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Chance that the automated player skips the search and plays a random cell
    pub fn random_move_chance(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Normal => 0.3,
            Difficulty::Hard => 0.0,
        }
    }

    /// Arena tick interval in milliseconds
    pub fn arena_tick_ms(&self) -> u32 {
        match self {
            Difficulty::Easy => ARENA_TICK_MS[0],
            Difficulty::Normal => ARENA_TICK_MS[1],
            Difficulty::Hard => ARENA_TICK_MS[2],
        }
    }
}

/// Who plays O in tic-tac-toe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans share the board
    #[serde(rename = "pvp")]
    PvP,
    /// O is played by the search engine
    #[default]
    #[serde(rename = "ai")]
    PvAI,
}

impl GameMode {
    /// Parse mode from string ("pvp", "ai" or "pvai", case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pvp" => Some(GameMode::PvP),
            "ai" | "pvai" => Some(GameMode::PvAI),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::PvP => "pvp",
            GameMode::PvAI => "ai",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            GameMode::PvP => GameMode::PvAI,
            GameMode::PvAI => GameMode::PvP,
        }
    }
}

/// Tic-tac-toe lifecycle
///
/// `Won` and `Draw` are terminal until the game is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Draw,
}

/// Arena lifecycle as seen by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArenaStatus {
    Running,
    Paused,
    GameOver,
}

/// Movement direction on the arena grid
///
/// `Up` decreases `y`, `Down` increases it; `Left`/`Right` act on `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The direction that would reverse the snake onto itself
    ///
    /// # Examples
    ///
    /// ```
    /// use game_hub_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A cell on the arena grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction`, wrapping at the grid edges
    ///
    /// # Examples
    ///
    /// ```
    /// use game_hub_types::{Direction, Point};
    ///
    /// assert_eq!(Point::new(19, 4).step(Direction::Right, 20), Point::new(0, 4));
    /// assert_eq!(Point::new(3, 0).step(Direction::Up, 20), Point::new(3, 19));
    /// ```
    pub fn step(&self, direction: Direction, grid_size: u8) -> Self {
        let last = grid_size.saturating_sub(1);
        match direction {
            Direction::Up => Self::new(self.x, if self.y == 0 { last } else { self.y - 1 }),
            Direction::Down => Self::new(self.x, if self.y >= last { 0 } else { self.y + 1 }),
            Direction::Left => Self::new(if self.x == 0 { last } else { self.x - 1 }, self.y),
            Direction::Right => Self::new(if self.x >= last { 0 } else { self.x + 1 }, self.y),
        }
    }
}

/// Input events accepted by the tic-tac-toe state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    /// Mark cell 0..8 for the player to move
    Place(usize),
    /// Fresh board, same mode and difficulty
    Reset,
    SetMode(GameMode),
    SetDifficulty(Difficulty),
}

/// Input events accepted by the arena state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaAction {
    /// Buffer a direction for the next tick
    Turn(Direction),
    /// Running ⇄ Paused
    TogglePause,
    /// Fresh body and food, keeping high score and difficulty
    Reset,
    SetDifficulty(Difficulty),
}

/// Static description of a game offered by the hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameDescriptor {
    pub id: u8,
    /// Command-line name
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub has_bot: bool,
    pub max_players: u8,
}

/// Games available in the hub
pub static CATALOG: [GameDescriptor; 2] = [
    GameDescriptor {
        id: 1,
        key: "tictactoe",
        name: "Tic-Tac-Toe",
        description: "Classic X & O game",
        has_bot: true,
        max_players: 2,
    },
    GameDescriptor {
        id: 2,
        key: "snake",
        name: "Snake Game",
        description: "Classic snake game",
        has_bot: false,
        max_players: 1,
    },
];

/// Look up a catalog entry by its command-line key (case-insensitive)
pub fn find_game(key: &str) -> Option<&'static GameDescriptor> {
    CATALOG.iter().find(|g| g.key.eq_ignore_ascii_case(key))
}
