//! Compressed simulation clock
//!
//! The single timing authority of a run. Every flight observes the same value during
//! a tick, and the value only ever moves forward by the configured step.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::{SimulationError, SimulationResult};

/// Furthest past the clock that schedules and taxi windows reach
fn schedule_horizon() -> Duration {
    Duration::days(2)
}

/// Logical clock advanced by a fixed compressed step per tick
#[derive(Debug, Clone)]
pub struct SimulationClock {
    start: DateTime<Utc>,
    now: DateTime<Utc>,
    step: Duration,
    ticks: u64,
}

impl SimulationClock {
    /// Create a clock at `start` advancing by `step` per tick
    pub fn new(start: DateTime<Utc>, step: Duration) -> SimulationResult<Self> {
        if step <= Duration::zero() {
            return Err(SimulationError::time_error(format!(
                "clock step must be positive, got {} minutes",
                step.num_minutes()
            )));
        }
        Ok(Self { start, now: start, step, ticks: 0 })
    }

    /// Move the clock forward one step and return the new value
    ///
    /// Fails without moving once the next value, plus the furthest a flight schedules
    /// ahead of it, would leave the representable calendar.
    pub fn advance(&mut self) -> SimulationResult<DateTime<Utc>> {
        let next = self
            .now
            .checked_add_signed(self.step)
            .filter(|next| next.checked_add_signed(schedule_horizon()).is_some())
            .ok_or_else(|| {
                SimulationError::time_error(format!(
                    "clock cannot advance past {} by {} minutes",
                    self.now,
                    self.step.num_minutes()
                ))
            })?;

        self.now = next;
        self.ticks += 1;
        debug!("Clock advanced to {} (tick {})", self.now, self.ticks);
        Ok(self.now)
    }

    /// Current value
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Ticks advanced so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated time elapsed since construction
    pub fn elapsed(&self) -> Duration {
        self.now - self.start
    }
}
