//! Flight entity and its operational state machine
//!
//! A [`Flight`] owns one journey between the hub and a spoke: immutable identity,
//! route and schedule, plus a lifecycle status and telemetry that change every tick.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::reference;
use crate::events::{EventSynthesizer, FlightEvent};
use crate::types::{FlightDesignator, FlightStatus};

/// Static identity assigned at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightIdentity {
    /// Operating airline code
    pub airline_code: String,
    /// Airline code plus numeric suffix
    pub designator: FlightDesignator,
    /// Aircraft registration
    pub tail_number: String,
    /// Aircraft type
    pub aircraft_type: String,
}

/// Departure and arrival airports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Departure airport code
    pub departure_airport: String,
    /// Arrival airport code
    pub arrival_airport: String,
}

impl Route {
    /// Route leaving the hub for a spoke
    pub fn outbound(hub: &str, spoke: &str) -> Self {
        Self { departure_airport: hub.to_string(), arrival_airport: spoke.to_string() }
    }

    /// Route from a spoke into the hub
    pub fn inbound(spoke: &str, hub: &str) -> Self {
        Self { departure_airport: spoke.to_string(), arrival_airport: hub.to_string() }
    }

    /// True when exactly one endpoint is the hub
    pub fn has_single_hub_endpoint(&self, hub: &str) -> bool {
        (self.departure_airport == hub) != (self.arrival_airport == hub)
    }

    /// Whether the flight terminates at the hub
    pub fn arrives_at(&self, airport: &str) -> bool {
        self.arrival_airport == airport
    }
}

/// Scheduled and actual times of a journey
///
/// Actual times are fixed at creation and never move afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSchedule {
    /// Planned off-block time
    pub scheduled_departure: DateTime<Utc>,
    /// Planned on-block time
    pub scheduled_arrival: DateTime<Utc>,
    /// Off-block time including any delay
    pub actual_departure: DateTime<Utc>,
    /// On-block time including any early or late shift
    pub actual_arrival: DateTime<Utc>,
}

impl FlightSchedule {
    /// Build a schedule from a planned departure, journey duration and the two adjustments
    pub fn new(
        scheduled_departure: DateTime<Utc>,
        duration: Duration,
        departure_delay: Duration,
        arrival_offset: Duration,
    ) -> Self {
        let scheduled_arrival = scheduled_departure + duration;
        Self {
            scheduled_departure,
            scheduled_arrival,
            actual_departure: scheduled_departure + departure_delay,
            actual_arrival: scheduled_arrival + arrival_offset,
        }
    }

    /// Planned journey duration
    pub fn duration(&self) -> Duration {
        self.scheduled_arrival - self.scheduled_departure
    }
}

/// Latitude/longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Position {
    /// Create a position
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Telemetry derived from the current status
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    /// Current position
    pub position: Position,
    /// Altitude in feet
    pub altitude_ft: u32,
    /// Ground speed in knots
    pub ground_speed_kts: u32,
}

impl Telemetry {
    /// Parked telemetry at a position
    pub fn at_rest(position: Position) -> Self {
        Self { position, altitude_ft: 0, ground_speed_kts: 0 }
    }
}

/// A status change observed during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTransition {
    /// Status before the tick
    pub from: FlightStatus,
    /// Status after the tick
    pub to: FlightStatus,
}

/// Outcome of one per-tick update
#[derive(Debug, Clone)]
pub struct FlightUpdate {
    /// Record synthesized for this tick
    pub event: FlightEvent,
    /// Status change, if one fired
    pub transition: Option<StatusTransition>,
}

/// One in-progress journey
#[derive(Debug, Clone)]
pub struct Flight {
    identity: FlightIdentity,
    route: Route,
    schedule: FlightSchedule,
    taxi_window: Duration,
    status: FlightStatus,
    telemetry: Telemetry,
}

impl Flight {
    /// Assemble a flight from its parts with parked telemetry at `origin`
    ///
    /// No reconciliation happens here; [`crate::flight::FlightGenerator`] performs the
    /// creation-time update.
    pub fn new(
        identity: FlightIdentity,
        route: Route,
        schedule: FlightSchedule,
        taxi_window: Duration,
        status: FlightStatus,
        origin: Position,
    ) -> Self {
        Self { identity, route, schedule, taxi_window, status, telemetry: Telemetry::at_rest(origin) }
    }

    /// Fleet key
    pub fn designator(&self) -> &FlightDesignator {
        &self.identity.designator
    }

    /// Static identity
    pub fn identity(&self) -> &FlightIdentity {
        &self.identity
    }

    /// Route
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Schedule
    pub fn schedule(&self) -> &FlightSchedule {
        &self.schedule
    }

    /// Current lifecycle status
    pub fn status(&self) -> FlightStatus {
        self.status
    }

    /// Current telemetry
    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    /// Whether the flight has landed and can be retired
    pub fn is_landed(&self) -> bool {
        self.status.is_terminal()
    }

    /// Evaluate the transition rules against `clock`, advancing at most one step
    ///
    /// Rules are checked in lifecycle order and the first match wins, so a flight
    /// never moves two states within one call.
    pub fn advance_status(&mut self, clock: DateTime<Utc>) -> Option<StatusTransition> {
        let due = match self.status {
            FlightStatus::Scheduled => clock >= self.schedule.actual_departure,
            FlightStatus::Departing => clock >= self.schedule.actual_departure + self.taxi_window,
            FlightStatus::EnRoute => clock >= self.schedule.actual_arrival,
            FlightStatus::Landed => false,
        };
        let next = self.status.next().filter(|_| due)?;

        let transition = StatusTransition { from: self.status, to: next };
        debug!("Flight {} {} -> {}", self.identity.designator, transition.from, transition.to);
        self.status = next;
        Some(transition)
    }

    /// Recompute telemetry from the current status
    pub fn refresh_telemetry<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self.status {
            FlightStatus::EnRoute => {
                self.telemetry.altitude_ft = rng.gen_range(reference::CRUISE_ALTITUDE_FT);
                self.telemetry.ground_speed_kts = rng.gen_range(reference::CRUISE_SPEED_KTS);
                self.telemetry.position.latitude +=
                    rng.gen_range(reference::CRUISE_POSITION_DRIFT_DEG);
                self.telemetry.position.longitude +=
                    rng.gen_range(reference::CRUISE_POSITION_DRIFT_DEG);
            }
            FlightStatus::Departing => {
                self.telemetry.altitude_ft = rng.gen_range(reference::CLIMB_ALTITUDE_FT);
                self.telemetry.ground_speed_kts = rng.gen_range(reference::CLIMB_SPEED_KTS);
            }
            FlightStatus::Scheduled | FlightStatus::Landed => {
                self.telemetry.altitude_ft = 0;
                self.telemetry.ground_speed_kts = 0;
            }
        }
    }

    /// Advance the state machine and refresh telemetry without emitting a record
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        clock: DateTime<Utc>,
        rng: &mut R,
    ) -> Option<StatusTransition> {
        let transition = self.advance_status(clock);
        self.refresh_telemetry(rng);
        transition
    }

    /// Update the flight for `clock` and synthesize this tick's record
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        clock: DateTime<Utc>,
        synthesizer: &EventSynthesizer,
        rng: &mut R,
    ) -> FlightUpdate {
        let transition = self.step(clock, rng);
        let event = synthesizer.synthesize(self, clock, rng);
        FlightUpdate { event, transition }
    }
}
