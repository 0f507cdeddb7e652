//! Cooperative fixed-interval tick scheduler.
//!
//! The caller's loop reports elapsed time with [`TickScheduler::advance`]; the
//! scheduler answers whether a tick is due. At most one tick fires per call and
//! the remainder is dropped, so a stalled loop never replays missed ticks.

use tracing::trace;

/// Identifies one registration; bumped by every `start`/`cancel`.
pub type Cadence = u32;

#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval_ms: u32,
    accumulated_ms: u32,
    armed: bool,
    cadence: Cadence,
}

impl TickScheduler {
    /// A scheduler that is not armed yet
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
            armed: false,
            cadence: 0,
        }
    }

    /// Register a fresh cadence, discarding any partial interval
    pub fn start(&mut self, interval_ms: u32) -> Cadence {
        self.interval_ms = interval_ms.max(1);
        self.accumulated_ms = 0;
        self.armed = true;
        self.cadence = self.cadence.wrapping_add(1);
        trace!(interval_ms = self.interval_ms, cadence = self.cadence, "scheduler started");
        self.cadence
    }

    /// Stop delivering ticks until the next `start`
    pub fn cancel(&mut self) {
        if !self.armed {
            return;
        }
        self.armed = false;
        self.accumulated_ms = 0;
        self.cadence = self.cadence.wrapping_add(1);
        trace!(cadence = self.cadence, "scheduler cancelled");
    }

    /// Change the interval without restarting the current cadence
    pub fn set_interval(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(1);
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    /// Time left until the next tick is due, `None` when not armed
    pub fn remaining_ms(&self) -> Option<u32> {
        self.armed
            .then(|| self.interval_ms.saturating_sub(self.accumulated_ms))
    }

    /// Report elapsed time; true when exactly one tick is due now
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if !self.armed {
            return false;
        }
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        if self.accumulated_ms < self.interval_ms {
            return false;
        }
        self.accumulated_ms = 0;
        true
    }
}
