//! Arena module - tick-driven snake simulation
//!
//! [`ArenaState::tick`] advances the simulation by exactly one cell:
//!
//! 1. Adopt the buffered `pending_direction`
//! 2. Step the head one cell, wrapping at the edges (toroidal grid)
//! 3. Self-collision against the pre-move body ends the game, body unchanged
//! 4. Push the new head
//! 5. On food: score, high score and a new food cell; otherwise drop the tail
//!
//! A tick is a no-op while paused or over. Direction requests are buffered
//! until the next tick and may never reverse the active direction.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::types::{ArenaStatus, Difficulty, Direction, Point, GRID_SIZE, INITIAL_HEAD};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or already over; nothing changed
    Idle,
    /// Moved one cell, length unchanged
    Moved,
    /// Moved onto food and grew by one segment
    Ate,
    /// Head ran into the body; the game is over
    Collided,
    /// Grew to cover every cell; no room left for food, the game is over
    Filled,
}

/// Complete arena state, as read by the presentation layer
///
/// Invariants while `is_over` is false: `score == body.len() - 1`, body
/// points are pairwise distinct, and `food` is not on the body.
/// `high_score >= score` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaState {
    /// Head first
    pub body: VecDeque<Point>,
    pub food: Point,
    pub direction: Direction,
    pub pending_direction: Direction,
    pub score: u32,
    pub high_score: u32,
    pub is_over: bool,
    pub is_paused: bool,
    pub difficulty: Difficulty,
    pub grid_size: u8,
}

impl ArenaState {
    /// Single-segment body at the spawn cell heading right, food placed at random
    pub fn new<R: Rng + ?Sized>(difficulty: Difficulty, high_score: u32, rng: &mut R) -> Self {
        let body: VecDeque<Point> = VecDeque::from([INITIAL_HEAD]);
        let food = random_free_cell(&body, GRID_SIZE, rng).unwrap_or(INITIAL_HEAD);
        Self {
            body,
            food,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            high_score,
            is_over: false,
            is_paused: false,
            difficulty,
            grid_size: GRID_SIZE,
        }
    }

    /// Build a state from an explicit body (head first), food and heading
    ///
    /// Score follows the body length; useful for replays and scenarios.
    pub fn from_parts(body: Vec<Point>, food: Point, direction: Direction) -> Self {
        let score = body.len().saturating_sub(1) as u32;
        Self {
            body: body.into(),
            food,
            direction,
            pending_direction: direction,
            score,
            high_score: score,
            is_over: false,
            is_paused: false,
            difficulty: Difficulty::default(),
            grid_size: GRID_SIZE,
        }
    }

    pub fn head(&self) -> Point {
        self.body.front().copied().unwrap_or(INITIAL_HEAD)
    }

    pub fn status(&self) -> ArenaStatus {
        if self.is_over {
            ArenaStatus::GameOver
        } else if self.is_paused {
            ArenaStatus::Paused
        } else {
            ArenaStatus::Running
        }
    }

    /// Advance the simulation by one cell
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if self.is_over || self.is_paused {
            return TickOutcome::Idle;
        }

        self.direction = self.pending_direction;
        let head = self.head().step(self.direction, self.grid_size);

        if self.body.contains(&head) {
            self.is_over = true;
            info!(score = self.score, ?head, "arena self-collision");
            return TickOutcome::Collided;
        }

        self.body.push_front(head);

        if head != self.food {
            self.body.pop_back();
            return TickOutcome::Moved;
        }

        self.score += 1;
        self.high_score = self.high_score.max(self.score);
        match random_free_cell(&self.body, self.grid_size, rng) {
            Some(food) => {
                self.food = food;
                debug!(score = self.score, ?food, "food eaten");
                TickOutcome::Ate
            }
            None => {
                self.is_over = true;
                info!(score = self.score, "arena filled");
                TickOutcome::Filled
            }
        }
    }

    /// Buffer a direction for the next tick.
    ///
    /// Rejected when it reverses the active direction or the game is over.
    /// Later calls before the next tick overwrite earlier ones.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.is_over || requested == self.direction.opposite() {
            return false;
        }
        self.pending_direction = requested;
        true
    }

    /// Fresh body and food; high score and difficulty survive
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new(self.difficulty, self.high_score, rng);
    }
}

/// Uniformly random grid cell not covered by `body`, `None` when the grid is full
pub fn random_free_cell<R: Rng + ?Sized>(
    body: &VecDeque<Point>,
    grid_size: u8,
    rng: &mut R,
) -> Option<Point> {
    let free: Vec<Point> = (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Point::new(x, y)))
        .filter(|p| !body.contains(p))
        .collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.gen_range(0..free.len())])
}
