//! Enumeration types for the airport operations simulator
//!
//! This module contains the enumeration types used throughout the simulation system,
//! including the flight lifecycle status, sink kinds, and delivery policies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operational lifecycle status of a flight
///
/// Variants are declared in lifecycle order so that `Ord` reflects progression:
/// a flight's status never compares lower on a later tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlightStatus {
    /// Waiting at the gate for its actual departure time
    Scheduled,
    /// Pushed back and taxiing or climbing out
    Departing,
    /// At cruise between the two airports
    EnRoute,
    /// On the ground at the arrival airport (terminal)
    Landed,
}

impl FlightStatus {
    /// All statuses in lifecycle order
    pub const ALL: [FlightStatus; 4] = [
        FlightStatus::Scheduled,
        FlightStatus::Departing,
        FlightStatus::EnRoute,
        FlightStatus::Landed,
    ];

    /// Canonical lowercase name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "scheduled",
            FlightStatus::Departing => "departing",
            FlightStatus::EnRoute => "en-route",
            FlightStatus::Landed => "landed",
        }
    }

    /// The status that follows this one, if any
    pub fn next(&self) -> Option<FlightStatus> {
        match self {
            FlightStatus::Scheduled => Some(FlightStatus::Departing),
            FlightStatus::Departing => Some(FlightStatus::EnRoute),
            FlightStatus::EnRoute => Some(FlightStatus::Landed),
            FlightStatus::Landed => None,
        }
    }

    /// Whether the flight has finished its journey
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlightStatus::Landed)
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlightStatus {
    type Err = String;

    /// Accepts the canonical names as well as re-cased, padded variants
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(FlightStatus::Scheduled),
            "departing" => Ok(FlightStatus::Departing),
            "en-route" | "enroute" | "en route" => Ok(FlightStatus::EnRoute),
            "landed" => Ok(FlightStatus::Landed),
            _ => Err(format!("Unknown flight status: {}", s)),
        }
    }
}

/// Kinds of sinks that can receive the event stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// JSON lines on standard output
    Stdout,
    /// JSON lines appended to a file
    File,
    /// HTTP ingestion endpoint
    Http,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::Stdout => write!(f, "stdout"),
            SinkKind::File => write!(f, "file"),
            SinkKind::Http => write!(f, "http"),
        }
    }
}

impl FromStr for SinkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stdout" | "console" | "print" => Ok(SinkKind::Stdout),
            "file" | "jsonl" => Ok(SinkKind::File),
            "http" | "https" | "stream" => Ok(SinkKind::Http),
            _ => Err(format!("Unknown sink kind: {}", s)),
        }
    }
}

/// What the fleet manager does when the sink rejects a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryPolicy {
    /// Stop delivering the current tick's records; the next tick proceeds normally
    FailFastTick,
    /// Log the failed record and keep delivering the rest of the tick
    SkipAndContinue,
    /// Stop the simulation loop with an error
    Halt,
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        DeliveryPolicy::FailFastTick
    }
}

impl fmt::Display for DeliveryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryPolicy::FailFastTick => write!(f, "fail-fast-tick"),
            DeliveryPolicy::SkipAndContinue => write!(f, "skip-and-continue"),
            DeliveryPolicy::Halt => write!(f, "halt"),
        }
    }
}

impl FromStr for DeliveryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "fail-fast-tick" | "fail-fast" => Ok(DeliveryPolicy::FailFastTick),
            "skip-and-continue" | "skip" => Ok(DeliveryPolicy::SkipAndContinue),
            "halt" | "abort" => Ok(DeliveryPolicy::Halt),
            _ => Err(format!("Unknown delivery policy: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_status_ordering_follows_lifecycle() {
        assert!(FlightStatus::Scheduled < FlightStatus::Departing);
        assert!(FlightStatus::Departing < FlightStatus::EnRoute);
        assert!(FlightStatus::EnRoute < FlightStatus::Landed);
    }

    #[test]
    fn test_flight_status_next() {
        assert_eq!(FlightStatus::Scheduled.next(), Some(FlightStatus::Departing));
        assert_eq!(FlightStatus::Departing.next(), Some(FlightStatus::EnRoute));
        assert_eq!(FlightStatus::EnRoute.next(), Some(FlightStatus::Landed));
        assert_eq!(FlightStatus::Landed.next(), None);
        assert!(FlightStatus::Landed.is_terminal());
    }

    #[test]
    fn test_flight_status_parsing_tolerates_messy_input() {
        assert_eq!("  EN-ROUTE  ".parse::<FlightStatus>().unwrap(), FlightStatus::EnRoute);
        assert_eq!("En-Route".parse::<FlightStatus>().unwrap(), FlightStatus::EnRoute);
        assert_eq!(" landed".parse::<FlightStatus>().unwrap(), FlightStatus::Landed);
        assert!("boarding".parse::<FlightStatus>().is_err());
    }

    #[test]
    fn test_flight_status_serializes_to_wire_name() {
        let json = serde_json::to_string(&FlightStatus::EnRoute).unwrap();
        assert_eq!(json, "\"en-route\"");
    }

    #[test]
    fn test_delivery_policy_parsing() {
        assert_eq!("fail_fast_tick".parse::<DeliveryPolicy>().unwrap(), DeliveryPolicy::FailFastTick);
        assert_eq!("skip".parse::<DeliveryPolicy>().unwrap(), DeliveryPolicy::SkipAndContinue);
        assert_eq!("HALT".parse::<DeliveryPolicy>().unwrap(), DeliveryPolicy::Halt);
        assert_eq!(DeliveryPolicy::default(), DeliveryPolicy::FailFastTick);
    }

    #[test]
    fn test_sink_kind_round_trips_through_display() {
        for kind in [SinkKind::Stdout, SinkKind::File, SinkKind::Http] {
            assert_eq!(kind.to_string().parse::<SinkKind>().unwrap(), kind);
        }
    }
}
