//! Layout helpers shared by the game views.

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Top-left corner that centres a `w` x `h` block
    pub fn centered(&self, w: u16, h: u16) -> (u16, u16) {
        (
            self.width.saturating_sub(w) / 2,
            self.height.saturating_sub(h) / 2,
        )
    }
}

pub(crate) mod palette {
    use super::{CellStyle, Rgb};

    pub const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
    pub const TITLE: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
    pub const HINT: CellStyle = CellStyle::fg(Rgb::new(140, 140, 150)).dim();
    pub const X_MARK: CellStyle = CellStyle::fg(Rgb::new(90, 170, 255)).bold();
    pub const O_MARK: CellStyle = CellStyle::fg(Rgb::new(255, 120, 110)).bold();
    pub const WIN_BG: Rgb = Rgb::new(40, 110, 60);
    pub const CURSOR_BG: Rgb = Rgb::new(60, 60, 80);
    pub const FIELD: CellStyle = CellStyle::fg(Rgb::new(60, 60, 70)).on(Rgb::new(20, 20, 28));
    pub const SNAKE_HEAD: CellStyle = CellStyle::fg(Rgb::new(120, 255, 120))
        .on(Rgb::new(20, 20, 28))
        .bold();
    pub const SNAKE_BODY: CellStyle = CellStyle::fg(Rgb::new(60, 200, 90)).on(Rgb::new(20, 20, 28));
    pub const FOOD: CellStyle = CellStyle::fg(Rgb::new(255, 90, 90)).on(Rgb::new(20, 20, 28));
    pub const BANNER: CellStyle = CellStyle::fg(Rgb::new(255, 220, 120))
        .on(Rgb::new(50, 40, 20))
        .bold();
}

/// Single-line box around an interior of `inner_w` x `inner_h` at `(x + 1, y + 1)`.
pub(crate) fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, inner_w: u16, inner_h: u16) {
    let style = palette::BORDER;
    let right = x + inner_w + 1;
    let bottom = y + inner_h + 1;
    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
}
