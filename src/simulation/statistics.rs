//! Statistics collection and reporting
//!
//! This module contains statistics collection and reporting functionality.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::flight::StatusTransition;
use crate::types::FlightStatus;

/// Counters for one run, the single source of truth for the final report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationStatistics {
    /// Ticks completed
    pub ticks: u64,
    /// Records synthesized
    pub records_emitted: u64,
    /// Records accepted by the sink
    pub records_delivered: u64,
    /// Records the sink refused or that failed to serialize
    pub records_failed: u64,
    /// Records dropped because the tick's delivery stopped early
    pub records_skipped: u64,
    /// Ticks whose delivery stopped at the first failure
    pub ticks_cut_short: u64,
    /// Flights created
    pub flights_spawned: u64,
    /// Flights retired after landing
    pub flights_retired: u64,
    /// Generated flights discarded because their designator was taken
    pub designator_collisions: u64,
    /// Status changes, keyed by the status entered
    pub transitions: BTreeMap<FlightStatus, u64>,
    /// Simulation clock when the run stopped
    pub final_clock: Option<DateTime<Utc>>,
    /// Wall-clock duration of the run
    pub wall_clock_duration: Duration,
}

impl SimulationStatistics {
    /// Create zeroed statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one status change
    pub fn record_transition(&mut self, transition: StatusTransition) {
        *self.transitions.entry(transition.to).or_insert(0) += 1;
    }

    /// Status changes into `status`
    pub fn transitions_into(&self, status: FlightStatus) -> u64 {
        self.transitions.get(&status).copied().unwrap_or(0)
    }

    /// Percentage of emitted records the sink accepted
    pub fn delivery_rate(&self) -> f64 {
        if self.records_emitted == 0 {
            0.0
        } else {
            (self.records_delivered as f64 / self.records_emitted as f64) * 100.0
        }
    }

    /// Average records per tick
    pub fn average_records_per_tick(&self) -> f64 {
        if self.ticks == 0 {
            0.0
        } else {
            self.records_emitted as f64 / self.ticks as f64
        }
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{} ticks | {} records emitted | {} delivered ({:.1}%) | {} failed | {} spawned | {} retired",
            self.ticks,
            self.records_emitted,
            self.records_delivered,
            self.delivery_rate(),
            self.records_failed,
            self.flights_spawned,
            self.flights_retired
        )
    }

    /// Multi-line report printed at shutdown
    pub fn generate_summary_report(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Simulation Summary Report ===\n\n");

        report.push_str(&format!(
            "Wall-Clock Duration: {:.2} seconds\n",
            self.wall_clock_duration.as_secs_f64()
        ));
        report.push_str(&format!("Ticks Completed: {}\n", self.ticks));
        if let Some(clock) = self.final_clock {
            report.push_str(&format!("Final Simulation Clock: {}\n", clock.to_rfc3339()));
        }
        report.push('\n');

        report.push_str("Records:\n");
        report.push_str(&format!(
            "  • Emitted: {} (avg {:.1}/tick)\n",
            self.records_emitted,
            self.average_records_per_tick()
        ));
        report.push_str(&format!(
            "  • Delivered: {} ({:.1}%)\n",
            self.records_delivered,
            self.delivery_rate()
        ));
        report.push_str(&format!("  • Failed: {}\n", self.records_failed));
        report.push_str(&format!(
            "  • Skipped: {} across {} ticks cut short\n\n",
            self.records_skipped, self.ticks_cut_short
        ));

        report.push_str("Fleet:\n");
        report.push_str(&format!("  • Flights Spawned: {}\n", self.flights_spawned));
        report.push_str(&format!("  • Flights Retired: {}\n", self.flights_retired));
        report.push_str(&format!(
            "  • Designator Collisions Regenerated: {}\n\n",
            self.designator_collisions
        ));

        report.push_str("Status Transitions:\n");
        for status in [FlightStatus::Departing, FlightStatus::EnRoute, FlightStatus::Landed] {
            report.push_str(&format!("  • Into {}: {}\n", status, self.transitions_into(status)));
        }

        report
    }
}

impl fmt::Display for SimulationStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.generate_summary_report())
    }
}
