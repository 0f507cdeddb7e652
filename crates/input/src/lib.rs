//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::ArenaAction`] and
//! [`crate::types::GridAction`]. Nothing here touches game state; the caller
//! hands the resulting action to the matching driver.

pub mod cursor;
pub mod map;

pub use game_hub_types as types;

pub use cursor::GridCursor;
pub use map::{arena_key_event, direction_key, should_quit};
