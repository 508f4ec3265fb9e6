//! Event synthesizer
//!
//! Turns a flight's internal state into a [`FlightEvent`], layering in the
//! per-emission randomness: a fresh event id, a messy event timestamp, a possibly
//! re-cased status, optional telemetry fields and re-rolled operational noise.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use super::messiness::{iso8601, mess_up_status, render_messy_timestamp};
use super::record::{FlightDetails, FlightEvent, LiveTelemetry, OperationalData, RouteInfo};
use crate::flight::{reference, Flight};
use crate::types::{EventId, FlightStatus, MessinessConfig, SimulationConfig};

/// Builds event records from flights
#[derive(Debug, Clone)]
pub struct EventSynthesizer {
    hub_airport: String,
    source_system_id: String,
    messiness: MessinessConfig,
}

impl EventSynthesizer {
    /// Create a synthesizer from the simulation configuration
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            hub_airport: config.hub_airport.clone(),
            source_system_id: config.source_system_id.clone(),
            messiness: config.messiness.clone(),
        }
    }

    /// Snapshot `flight` at `clock` into a new record
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        flight: &Flight,
        clock: DateTime<Utc>,
        rng: &mut R,
    ) -> FlightEvent {
        let status = flight.status();

        // Only flights landed at the hub turn around
        let turnaround_time_minutes =
            if status == FlightStatus::Landed && flight.route().arrives_at(&self.hub_airport) {
                Some(rng.gen_range(reference::TURNAROUND_MINUTES))
            } else {
                None
            };

        let operational_data = OperationalData {
            taxi_time_minutes: match status {
                FlightStatus::Departing | FlightStatus::Landed => {
                    rng.gen_range(reference::TAXI_TIME_MINUTES)
                }
                _ => 0,
            },
            turnaround_time_minutes,
            runway_in_use: format!(
                "{}{}",
                rng.gen_range(reference::RUNWAY_NUMBERS),
                pick_char(&reference::RUNWAY_SUFFIXES, rng)
            ),
            passenger_count: rng.gen_range(reference::PASSENGER_COUNT),
            baggage_count: rng.gen_range(reference::BAGGAGE_COUNT),
            security_wait_time_minutes: rng.gen_range(reference::SECURITY_WAIT_MINUTES),
            aircraft_type: flight.identity().aircraft_type.clone(),
            weather_conditions: reference::WEATHER_CONDITIONS
                .choose(rng)
                .copied()
                .unwrap_or_default()
                .to_string(),
        };

        let event_id = EventId::generate(rng);
        let event_timestamp = render_messy_timestamp(clock, rng);

        let identity = flight.identity();
        let route = flight.route();
        let schedule = flight.schedule();

        let route_info = RouteInfo {
            departure_airport_iata: route.departure_airport.clone(),
            arrival_airport_iata: route.arrival_airport.clone(),
            departure_gate: random_gate(rng),
            arrival_gate: random_gate(rng),
            scheduled_departure_utc: iso8601(schedule.scheduled_departure),
            scheduled_arrival_utc: iso8601(schedule.scheduled_arrival),
            actual_departure_utc: iso8601(schedule.actual_departure),
            actual_arrival_utc: status
                .is_terminal()
                .then(|| iso8601(schedule.actual_arrival)),
        };

        let telemetry = flight.telemetry();
        let presence = self.messiness.optional_field_presence;
        let live_telemetry = LiveTelemetry {
            location_str: format!(
                "{:.6};{:.6}",
                telemetry.position.latitude, telemetry.position.longitude
            ),
            altitude_ft: telemetry.altitude_ft,
            ground_speed_kts: telemetry.ground_speed_kts,
            vertical_speed_fps: rng
                .gen_bool(presence)
                .then(|| rng.gen_range(reference::VERTICAL_SPEED_FPS)),
            heading: rng.gen_bool(presence).then(|| rng.gen_range(reference::HEADING_DEG)),
            flight_status: mess_up_status(status, self.messiness.status_mess_probability, rng),
        };

        FlightEvent {
            event_id,
            event_timestamp,
            source_system_id: self.source_system_id.clone(),
            flight_details: FlightDetails {
                flight_icao: identity.designator.clone(),
                airline_iata: identity.airline_code.clone(),
                tail_number: identity.tail_number.clone(),
            },
            route_info,
            operational_data,
            live_telemetry,
        }
    }
}

fn pick_char<R: Rng + ?Sized>(chars: &[char], rng: &mut R) -> char {
    chars.choose(rng).copied().unwrap_or_default()
}

fn random_gate<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}{}",
        pick_char(&reference::GATE_CONCOURSES, rng),
        rng.gen_range(reference::GATE_NUMBERS)
    )
}
