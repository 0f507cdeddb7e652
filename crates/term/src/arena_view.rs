//! ArenaView: maps an arena state into a terminal framebuffer.
//!
//! Each grid cell is two terminal columns wide to keep the field roughly
//! square. This module is pure (no I/O).

use crate::core::ArenaState;
use crate::fb::FrameBuffer;
use crate::types::{ArenaStatus, Point};
use crate::view::{draw_border, palette, Viewport};

const HINT: &str = "arrows/wasd steer  p pause  1/2/3 speed  r restart  q quit";

#[derive(Debug, Clone, Copy)]
pub struct ArenaView {
    /// Terminal columns per grid cell
    cell_w: u16,
}

impl Default for ArenaView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl ArenaView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn render(&self, state: &ArenaState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    pub fn render_into(&self, state: &ArenaState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let inner_w = state.grid_size as u16 * self.cell_w;
        let inner_h = state.grid_size as u16;
        let (fx, top) = viewport.centered(inner_w + 2, inner_h + 4);

        let header = format!(
            "SNAKE   score: {}   best: {}   speed: {}",
            state.score,
            state.high_score,
            state.difficulty.as_str()
        );
        fb.put_str_centered(top, &header, palette::TITLE);

        let fy = top + 1;
        draw_border(fb, fx, fy, inner_w, inner_h);
        fb.fill_rect(fx + 1, fy + 1, inner_w, inner_h, ' ', palette::FIELD);

        let to_screen = |p: Point| (fx + 1 + p.x as u16 * self.cell_w, fy + 1 + p.y as u16);

        let (x, y) = to_screen(state.food);
        fb.put_char(x, y, '●', palette::FOOD);

        for (i, &segment) in state.body.iter().enumerate().rev() {
            let (x, y) = to_screen(segment);
            let (ch, style) = if i == 0 {
                ('█', palette::SNAKE_HEAD)
            } else {
                ('▓', palette::SNAKE_BODY)
            };
            fb.fill_rect(x, y, self.cell_w, 1, ch, style);
        }

        let banner = match state.status() {
            ArenaStatus::Running => None,
            ArenaStatus::Paused => Some(" PAUSED - press p to resume ".to_string()),
            ArenaStatus::GameOver => Some(format!(
                " GAME OVER - score {} - press r to restart ",
                state.score
            )),
        };
        if let Some(banner) = banner {
            fb.put_str_centered(fy + 1 + inner_h / 2, &banner, palette::BANNER);
        }

        fb.put_str_centered(fy + inner_h + 2, HINT, palette::HINT);
    }
}
