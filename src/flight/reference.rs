//! Fixed sample sets and value bands used to build flights and records

use std::ops::RangeInclusive;

/// Airline codes a flight may be operated by
pub const AIRLINES: [&str; 6] = ["6E", "AI", "UK", "SG", "EK", "QR"];

/// Aircraft types assigned at creation
pub const AIRCRAFT_TYPES: [&str; 5] = ["B777", "A380", "B737", "A320", "B787"];

/// Weather reported with each record
pub const WEATHER_CONDITIONS: [&str; 5] = ["Clear", "Hazy", "Rain", "Windy", "Fog"];

/// Registration prefix for tail numbers
pub const TAIL_PREFIX: &str = "VT-";

/// Letters used for the three-letter tail suffix
pub const TAIL_LETTERS: [char; 3] = ['A', 'B', 'C'];

/// Gate concourses
pub const GATE_CONCOURSES: [char; 3] = ['A', 'B', 'C'];

/// Gate numbers within a concourse
pub const GATE_NUMBERS: RangeInclusive<u8> = 1..=20;

/// Runway headings
pub const RUNWAY_NUMBERS: RangeInclusive<u8> = 1..=36;

/// Parallel runway suffixes
pub const RUNWAY_SUFFIXES: [char; 3] = ['L', 'R', 'C'];

/// Numeric suffix of a flight designator
pub const FLIGHT_NUMBERS: RangeInclusive<u16> = 100..=9999;

/// Compressed journey duration in minutes
pub const FLIGHT_DURATION_MINUTES: RangeInclusive<i64> = 30..=90;

/// Chance that departure slips
pub const DEPARTURE_DELAY_PROBABILITY: f64 = 0.3;

/// Departure slip in minutes
pub const DEPARTURE_DELAY_MINUTES: RangeInclusive<i64> = 10..=60;

/// Chance that arrival moves
pub const ARRIVAL_OFFSET_PROBABILITY: f64 = 0.25;

/// Arrival shift in minutes, early or late
pub const ARRIVAL_OFFSET_MINUTES: RangeInclusive<i64> = -120..=300;

/// Cruise altitude band in feet
pub const CRUISE_ALTITUDE_FT: RangeInclusive<u32> = 28_000..=42_000;

/// Cruise ground speed band in knots
pub const CRUISE_SPEED_KTS: RangeInclusive<u32> = 450..=550;

/// Climb-out altitude band in feet
pub const CLIMB_ALTITUDE_FT: RangeInclusive<u32> = 1_000..=10_000;

/// Climb-out ground speed band in knots
pub const CLIMB_SPEED_KTS: RangeInclusive<u32> = 100..=200;

/// Per-tick position drift in degrees while en-route
pub const CRUISE_POSITION_DRIFT_DEG: RangeInclusive<f64> = -0.5..=0.5;

/// Taxi time reported while departing or landed
pub const TAXI_TIME_MINUTES: RangeInclusive<u32> = 5..=25;

/// Turnaround time reported for flights landed at the hub
pub const TURNAROUND_MINUTES: RangeInclusive<u32> = 45..=120;

/// Passengers on board
pub const PASSENGER_COUNT: RangeInclusive<u32> = 80..=450;

/// Checked bags
pub const BAGGAGE_COUNT: RangeInclusive<u32> = 100..=500;

/// Security queue wait in minutes
pub const SECURITY_WAIT_MINUTES: RangeInclusive<u32> = 5..=60;

/// Vertical speed in feet per second
pub const VERTICAL_SPEED_FPS: RangeInclusive<i32> = -50..=50;

/// Heading in degrees
pub const HEADING_DEG: RangeInclusive<u16> = 0..=360;
