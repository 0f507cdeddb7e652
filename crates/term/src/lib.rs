//! Terminal "game renderer" module.
//!
//! Views render game state into a plain framebuffer; [`TerminalRenderer`]
//! flushes that framebuffer with crossterm, rewriting only changed runs.
//! No ratatui widgets or layout.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Views are pure functions of state, so they can be unit-tested
//! - Precise control over aspect ratio (2 columns per arena cell)

pub mod arena_view;
pub mod fb;
pub mod grid_view;
pub mod renderer;
pub mod view;

pub use game_hub_core as core;
pub use game_hub_types as types;

pub use arena_view::ArenaView;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use grid_view::{GridOverlay, GridView};
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use view::Viewport;
