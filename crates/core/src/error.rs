//! Error types for the game engines
//!
//! Only programming errors surface here. Rejected player input (an occupied
//! cell, a 180° turn) is a normal outcome and is reported by the transition
//! returning `false` instead.

use thiserror::Error;

/// Errors raised by the adversarial search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The caller asked for a move on a board without an empty cell.
    #[error("search precondition violated: {0}")]
    PreconditionViolation(&'static str),
}

/// Errors raised when driving the automated tic-tac-toe turn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("no automated move is pending")]
    NoPendingTurn,

    #[error("automated move ticket is stale (episode {ticket_episode}, ply {ticket_ply})")]
    StaleTicket { ticket_episode: u32, ticket_ply: u8 },

    #[error(transparent)]
    Search(#[from] SearchError),
}
