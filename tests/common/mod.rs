//! Shared helpers for integration tests

#![allow(dead_code)]

use airport_ops_simulator::sink::{Sink, SinkError, SinkResult};
use airport_ops_simulator::types::SimulationConfig;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use std::collections::BTreeSet;

/// Fixed simulation start used across tests
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap()
}

/// Seeded, unthrottled configuration with default network settings
pub fn test_config(seed: u64) -> SimulationConfig {
    SimulationConfig {
        seed: Some(seed),
        start_time: Some(start_time()),
        tick_interval_secs: 0.0,
        ..Default::default()
    }
}

/// Keeps every delivered record and can be told to fail specific calls
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Zero-based call indices that fail
    pub fail_on: BTreeSet<usize>,
    /// Calls received so far, failed ones included
    pub calls: usize,
    /// Delivered records as (partition key, parsed JSON)
    pub records: Vec<(String, Value)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(calls: impl IntoIterator<Item = usize>) -> Self {
        Self { fail_on: calls.into_iter().collect(), ..Default::default() }
    }

    /// Take the records delivered since the last drain
    pub fn drain(&mut self) -> Vec<(String, Value)> {
        std::mem::take(&mut self.records)
    }
}

impl Sink for RecordingSink {
    fn name(&self) -> &str {
        "recording"
    }

    fn probe(&mut self) -> SinkResult<()> {
        Ok(())
    }

    fn send(&mut self, payload: &[u8], partition_key: &str) -> SinkResult<()> {
        let call = self.calls;
        self.calls += 1;
        if self.fail_on.contains(&call) {
            return Err(SinkError::Rejected { partition_key: partition_key.to_string(), status: 503 });
        }
        let value: Value = serde_json::from_slice(payload)?;
        self.records.push((partition_key.to_string(), value));
        Ok(())
    }
}
