//! GridView: maps a tic-tac-toe state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::TurnGameState;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{GameMode, GameStatus, Player, BOARD_CELLS};
use crate::view::{draw_border, palette, Viewport};

const INNER_W: u16 = 11;
const INNER_H: u16 = 5;
/// Title, gap, framed board, gap, three text lines
const BLOCK_H: u16 = 1 + 1 + (INNER_H + 2) + 1 + 3;
const HINT: &str = "1-9 / arrows+enter place  m mode  e/n/h level  r reset  q quit";

/// Front-end state that is not part of the game itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridOverlay {
    pub cursor: Option<usize>,
    pub ai_thinking: bool,
    pub end_screen: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GridView;

impl GridView {
    pub fn render(&self, state: &TurnGameState, overlay: GridOverlay, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, overlay, viewport, &mut fb);
        fb
    }

    pub fn render_into(
        &self,
        state: &TurnGameState,
        overlay: GridOverlay,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (_, top) = viewport.centered(INNER_W + 2, BLOCK_H);
        let (bx, _) = viewport.centered(INNER_W + 2, 0);
        fb.put_str_centered(top, "TIC-TAC-TOE", palette::TITLE);

        let by = top + 2;
        draw_border(fb, bx, by, INNER_W, INNER_H);
        draw_separators(fb, bx + 1, by + 1);

        let winning = state.winning_line.unwrap_or_default();
        for cell in 0..BOARD_CELLS {
            let x = bx + 1 + (cell % 3) as u16 * 4;
            let y = by + 1 + (cell / 3) as u16 * 2;

            let mut style = match state.board.get(cell) {
                Some(Player::X) => palette::X_MARK,
                Some(Player::O) => palette::O_MARK,
                None => palette::HINT,
            };
            if state.winning_line.is_some() && winning.contains(&cell) {
                style = style.on(palette::WIN_BG);
            } else if overlay.cursor == Some(cell) && !state.is_finished() {
                style = style.on(palette::CURSOR_BG);
            }

            let mark = match state.board.get(cell) {
                Some(player) => player.as_char(),
                None => char::from(b'1' + cell as u8),
            };
            fb.put_char(x, y, ' ', style);
            fb.put_char(x + 1, y, mark, style);
            fb.put_char(x + 2, y, ' ', style);
        }

        let text_y = by + INNER_H + 3;
        let (status, style) = status_line(state, overlay);
        fb.put_str_centered(text_y, &status, style);

        let mode = match state.mode {
            GameMode::PvP => "two players",
            GameMode::PvAI => "vs computer",
        };
        let settings = format!("mode: {mode}   level: {}", state.difficulty.as_str());
        fb.put_str_centered(text_y + 1, &settings, CellStyle::PLAIN);
        fb.put_str_centered(text_y + 2, HINT, palette::HINT);
    }
}

fn draw_separators(fb: &mut FrameBuffer, x: u16, y: u16) {
    let style = palette::BORDER;
    for row in [1, 3] {
        fb.put_str(x, y + row, "───┼───┼───", style);
    }
    for row in [0, 2, 4] {
        fb.put_char(x + 3, y + row, '│', style);
        fb.put_char(x + 7, y + row, '│', style);
    }
}

fn status_line(state: &TurnGameState, overlay: GridOverlay) -> (String, CellStyle) {
    match state.status {
        GameStatus::Playing if overlay.ai_thinking => {
            ("O is thinking...".to_string(), palette::O_MARK)
        }
        GameStatus::Playing => {
            let style = match state.current_player {
                Player::X => palette::X_MARK,
                Player::O => palette::O_MARK,
            };
            (format!("{} to move", state.current_player.as_char()), style)
        }
        _ if !overlay.end_screen => (String::new(), CellStyle::PLAIN),
        GameStatus::Won => {
            let winner = state.winner.map_or('?', |p| p.as_char());
            (format!(" {winner} wins! press r for a new game "), palette::BANNER)
        }
        GameStatus::Draw => (" draw! press r for a new game ".to_string(), palette::BANNER),
    }
}
