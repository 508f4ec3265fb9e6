//! Flight event record
//!
//! The nested four-group JSON shape consumed by the downstream pipeline. Optional
//! fields serialize as explicit `null` rather than being omitted.

use serde::{Deserialize, Serialize};

use super::messiness::RenderedTimestamp;
use crate::types::{EventId, FlightDesignator};

/// Identity group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightDetails {
    /// Flight designator, also the partition key
    pub flight_icao: FlightDesignator,
    /// Airline code
    pub airline_iata: String,
    /// Aircraft registration
    pub tail_number: String,
}

/// Route group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    /// Departure airport code
    pub departure_airport_iata: String,
    /// Arrival airport code
    pub arrival_airport_iata: String,
    /// Departure gate, re-rolled every tick
    pub departure_gate: String,
    /// Arrival gate, re-rolled every tick
    pub arrival_gate: String,
    /// Scheduled departure, ISO-8601
    pub scheduled_departure_utc: String,
    /// Scheduled arrival, ISO-8601
    pub scheduled_arrival_utc: String,
    /// Actual departure, ISO-8601
    pub actual_departure_utc: String,
    /// Actual arrival, ISO-8601, only once landed
    pub actual_arrival_utc: Option<String>,
}

/// Operational group; every value is re-rolled each tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalData {
    /// Taxi time while departing or landed, otherwise 0
    pub taxi_time_minutes: u32,
    /// Turnaround time for flights landed at the hub
    pub turnaround_time_minutes: Option<u32>,
    /// Runway identifier such as `27L`
    pub runway_in_use: String,
    /// Passengers on board
    pub passenger_count: u32,
    /// Checked bags
    pub baggage_count: u32,
    /// Security queue wait
    pub security_wait_time_minutes: u32,
    /// Aircraft type
    pub aircraft_type: String,
    /// Reported weather
    pub weather_conditions: String,
}

/// Telemetry group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveTelemetry {
    /// `lat;lon` with six decimals
    pub location_str: String,
    /// Altitude in feet
    pub altitude_ft: u32,
    /// Ground speed in knots
    pub ground_speed_kts: u32,
    /// Vertical speed in feet per second
    pub vertical_speed_fps: Option<i32>,
    /// Heading in degrees
    pub heading: Option<u16>,
    /// Lifecycle status, possibly padded and re-cased
    pub flight_status: String,
}

/// One immutable snapshot of a flight, emitted once per tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightEvent {
    /// Unique per emission
    pub event_id: EventId,
    /// Tick timestamp in a randomly chosen encoding
    pub event_timestamp: RenderedTimestamp,
    /// Producer tag
    pub source_system_id: String,
    /// Identity group
    pub flight_details: FlightDetails,
    /// Route group
    pub route_info: RouteInfo,
    /// Operational group
    pub operational_data: OperationalData,
    /// Telemetry group
    pub live_telemetry: LiveTelemetry,
}

impl FlightEvent {
    /// Key that keeps one flight's records on one partition
    pub fn partition_key(&self) -> &str {
        self.flight_details.flight_icao.as_str()
    }

    /// Serialize as a single JSON object
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
