//! Timed driving of the game state machines.
//!
//! Nothing in here reads a clock either: the front end measures elapsed time
//! and reports it through `update(elapsed_ms)`. Each driver owns its state
//! machine outright, so input and timer events share one sequential entry
//! point per game.
//!
//! - [`TickScheduler`]: fixed-interval cadence, at most one tick per update
//! - [`ArenaDriver`]: arena game plus its scheduler
//! - [`TurnDriver`]: tic-tac-toe game plus the automated-move delay and the
//!   end-screen delay

pub mod arena_driver;
pub mod scheduler;
pub mod turn_driver;

pub use arena_driver::ArenaDriver;
pub use scheduler::{Cadence, TickScheduler};
pub use turn_driver::TurnDriver;
