//! Game hub (workspace facade crate).
//!
//! Re-exports the member crates under short names so integration tests and
//! the binary can write `game_hub::core::TurnGame`, `game_hub::engine::ArenaDriver`
//! and so on. Runtime configuration lives in [`config`].

pub mod config;

pub use game_hub_core as core;
pub use game_hub_engine as engine;
pub use game_hub_input as input;
pub use game_hub_term as term;
pub use game_hub_types as types;
