//! Flight generation
//!
//! Draws the static attributes and schedule of a new flight, assigns a weighted
//! initial status and reconciles it with one update against the creation clock.

use chrono::{DateTime, Duration, Utc};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};

use super::flight::{Flight, FlightIdentity, FlightSchedule, Position, Route};
use super::reference;
use crate::types::{ConfigValidationError, FlightDesignator, FlightStatus, SimulationConfig};

/// Builds new flights for the fleet
#[derive(Debug, Clone)]
pub struct FlightGenerator {
    hub_airport: String,
    spoke_airports: Vec<String>,
    hub_position: Position,
    taxi_window: Duration,
    initial_status: WeightedIndex<u32>,
}

impl FlightGenerator {
    /// Create a generator for the network described by `config`
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigValidationError> {
        if config.spoke_airports.is_empty() {
            return Err(ConfigValidationError::EmptySpokeSet);
        }

        Ok(Self {
            hub_airport: config.hub_airport.clone(),
            spoke_airports: config.spoke_airports.clone(),
            hub_position: Position::new(config.hub_latitude, config.hub_longitude),
            taxi_window: config.taxi_window()?,
            initial_status: config.initial_status_distribution()?,
        })
    }

    /// Hub airport code
    pub fn hub_airport(&self) -> &str {
        &self.hub_airport
    }

    /// Create a flight seeded with the current simulation clock
    ///
    /// The departure is placed backward from `now` by a random fraction of the journey
    /// so some flights start mid-journey. The initial status is drawn independently of
    /// the schedule and then reconciled by one update at `now`, which may move it on.
    #[instrument(skip(self, rng), level = "debug")]
    pub fn generate<R: Rng + ?Sized>(&self, now: DateTime<Utc>, rng: &mut R) -> Flight {
        let identity = self.draw_identity(rng);
        let route = self.draw_route(rng);
        let schedule = Self::draw_schedule(now, rng);
        let initial_status = self.draw_initial_status(rng);

        let mut flight = Flight::new(
            identity,
            route,
            schedule,
            self.taxi_window,
            initial_status,
            self.hub_position,
        );
        flight.step(now, rng);

        debug!(
            "Generated flight {} {} -> {} (drawn {}, reconciled {})",
            flight.designator(),
            flight.route().departure_airport,
            flight.route().arrival_airport,
            initial_status,
            flight.status()
        );
        flight
    }

    fn draw_identity<R: Rng + ?Sized>(&self, rng: &mut R) -> FlightIdentity {
        let airline_code =
            reference::AIRLINES.choose(rng).copied().unwrap_or_default().to_string();
        let designator =
            FlightDesignator::new(&airline_code, rng.gen_range(reference::FLIGHT_NUMBERS));
        let tail_suffix: String = (0..3)
            .filter_map(|_| reference::TAIL_LETTERS.choose(rng).copied())
            .collect();
        let aircraft_type =
            reference::AIRCRAFT_TYPES.choose(rng).copied().unwrap_or_default().to_string();

        FlightIdentity {
            airline_code,
            designator,
            tail_number: format!("{}{}", reference::TAIL_PREFIX, tail_suffix),
            aircraft_type,
        }
    }

    fn draw_route<R: Rng + ?Sized>(&self, rng: &mut R) -> Route {
        // Never empty, checked in `new`
        let spoke = self.spoke_airports.choose(rng).map(String::as_str).unwrap_or_default();
        if rng.gen_bool(0.5) {
            Route::outbound(&self.hub_airport, spoke)
        } else {
            Route::inbound(spoke, &self.hub_airport)
        }
    }

    /// Weighted draw over the lifecycle statuses
    fn draw_initial_status<R: Rng + ?Sized>(&self, rng: &mut R) -> FlightStatus {
        FlightStatus::ALL[self.initial_status.sample(rng)]
    }

    fn draw_schedule<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> FlightSchedule {
        let duration = Duration::minutes(rng.gen_range(reference::FLIGHT_DURATION_MINUTES));
        let journey_progress: f64 = rng.gen();
        let elapsed =
            Duration::milliseconds((duration.num_milliseconds() as f64 * journey_progress) as i64);

        let departure_delay = if rng.gen_bool(reference::DEPARTURE_DELAY_PROBABILITY) {
            Duration::minutes(rng.gen_range(reference::DEPARTURE_DELAY_MINUTES))
        } else {
            Duration::zero()
        };

        let arrival_offset = if rng.gen_bool(reference::ARRIVAL_OFFSET_PROBABILITY) {
            Duration::minutes(rng.gen_range(reference::ARRIVAL_OFFSET_MINUTES))
        } else {
            Duration::zero()
        };

        FlightSchedule::new(now - elapsed, duration, departure_delay, arrival_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_generated_route_has_exactly_one_hub_endpoint() {
        let config = SimulationConfig::default();
        let generator = FlightGenerator::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..500 {
            let flight = generator.generate(now(), &mut rng);
            assert!(flight.route().has_single_hub_endpoint("AMD"));
            let spoke = if flight.route().departure_airport == "AMD" {
                &flight.route().arrival_airport
            } else {
                &flight.route().departure_airport
            };
            assert!(config.spoke_airports.contains(spoke));
        }
    }

    #[test]
    fn test_generated_identity_shape() {
        let generator = FlightGenerator::new(&SimulationConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..200 {
            let flight = generator.generate(now(), &mut rng);
            let identity = flight.identity();
            assert!(reference::AIRLINES.contains(&identity.airline_code.as_str()));
            assert!(identity.designator.as_str().starts_with(&identity.airline_code));
            let number: u16 =
                identity.designator.as_str()[identity.airline_code.len()..].parse().unwrap();
            assert!(reference::FLIGHT_NUMBERS.contains(&number));
            assert_eq!(identity.tail_number.len(), 6);
            assert!(identity.tail_number.starts_with("VT-"));
            assert!(identity.tail_number[3..].chars().all(|c| "ABC".contains(c)));
            assert!(reference::AIRCRAFT_TYPES.contains(&identity.aircraft_type.as_str()));
        }
    }

    #[test]
    fn test_generated_schedule_bounds() {
        let generator = FlightGenerator::new(&SimulationConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..500 {
            let flight = generator.generate(now(), &mut rng);
            let schedule = flight.schedule();
            let duration = schedule.duration();

            assert!(duration >= Duration::minutes(30) && duration <= Duration::minutes(90));
            // Departure is pulled back from the creation clock by at most one journey
            assert!(schedule.scheduled_departure <= now());
            assert!(schedule.scheduled_departure >= now() - duration);

            let delay = schedule.actual_departure - schedule.scheduled_departure;
            assert!(delay == Duration::zero()
                || (delay >= Duration::minutes(10) && delay <= Duration::minutes(60)));

            let offset = schedule.actual_arrival - schedule.scheduled_arrival;
            assert!(offset >= Duration::minutes(-120) && offset <= Duration::minutes(300));
        }
    }

    #[test]
    fn test_generation_is_reproducible_from_seed() {
        let generator = FlightGenerator::new(&SimulationConfig::default()).unwrap();
        let a = generator.generate(now(), &mut StdRng::seed_from_u64(77));
        let b = generator.generate(now(), &mut StdRng::seed_from_u64(77));

        assert_eq!(a.identity(), b.identity());
        assert_eq!(a.route(), b.route());
        assert_eq!(a.schedule(), b.schedule());
        assert_eq!(a.status(), b.status());
        assert_eq!(a.telemetry(), b.telemetry());
    }

    #[test]
    fn test_empty_spoke_set_is_rejected() {
        let config = SimulationConfig { spoke_airports: Vec::new(), ..Default::default() };
        assert!(matches!(
            FlightGenerator::new(&config),
            Err(ConfigValidationError::EmptySpokeSet)
        ));
    }

    #[test]
    fn test_initial_status_draw_tracks_weights() {
        let generator = FlightGenerator::new(&SimulationConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let mut counts = [0usize; 4];
        for _ in 0..10_000 {
            let status = generator.draw_initial_status(&mut rng);
            counts[FlightStatus::ALL.iter().position(|s| *s == status).unwrap()] += 1;
        }
        // 30 / 25 / 35 / 10 percent, with generous slack
        assert!((2_700..3_300).contains(&counts[0]));
        assert!((2_200..2_800).contains(&counts[1]));
        assert!((3_200..3_800).contains(&counts[2]));
        assert!((800..1_200).contains(&counts[3]));
    }

    #[test]
    fn test_initial_status_weights_come_from_config() {
        let config = SimulationConfig { initial_status_weights: [0, 0, 1, 0], ..Default::default() };
        let generator = FlightGenerator::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..200 {
            assert_eq!(generator.draw_initial_status(&mut rng), FlightStatus::EnRoute);
        }
    }

    #[test]
    fn test_unusable_weights_are_rejected() {
        let config = SimulationConfig { initial_status_weights: [0; 4], ..Default::default() };
        assert!(matches!(
            FlightGenerator::new(&config),
            Err(ConfigValidationError::InvalidStatusWeights { .. })
        ));
    }

    #[test]
    fn test_all_initial_statuses_occur() {
        let generator = FlightGenerator::new(&SimulationConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..1000 {
            seen.insert(generator.generate(now(), &mut rng).status());
        }

        assert_eq!(seen.len(), 4);
    }
}
