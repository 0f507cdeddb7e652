//! Key mapping from terminal events to arena actions.

use crate::types::{ArenaAction, Difficulty, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to arena actions.
pub fn arena_key_event(key: KeyEvent) -> Option<ArenaAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    if let Some(direction) = direction_key(key.code) {
        return Some(ArenaAction::Turn(direction));
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(ArenaAction::TogglePause)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ArenaAction::Reset),

        // Speed
        KeyCode::Char('1') => Some(ArenaAction::SetDifficulty(Difficulty::Easy)),
        KeyCode::Char('2') => Some(ArenaAction::SetDifficulty(Difficulty::Normal)),
        KeyCode::Char('3') => Some(ArenaAction::SetDifficulty(Difficulty::Hard)),

        _ => None,
    }
}

/// Arrow keys and WASD.
pub fn direction_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
