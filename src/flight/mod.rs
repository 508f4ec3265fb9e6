//! Flight entities and their lifecycle
//!
//! This module models a single journey between the hub and a spoke airport and the
//! generator that creates new journeys for the fleet.
//!
//! # Overview
//!
//! - **Flight**: identity, route, schedule and the four-state lifecycle
//!   (`scheduled -> departing -> en-route -> landed`) with status-derived telemetry
//! - **FlightGenerator**: draws static attributes and a schedule relative to the
//!   current simulation clock, then reconciles the drawn status with one update
//! - **reference**: the fixed sample sets and value bands both of the above draw from
//!
//! # Usage Example
//!
//! ```rust
//! use airport_ops_simulator::flight::FlightGenerator;
//! use airport_ops_simulator::types::SimulationConfig;
//! use chrono::Utc;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = SimulationConfig::default();
//! let generator = FlightGenerator::new(&config).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let flight = generator.generate(Utc::now(), &mut rng);
//! assert!(flight.route().has_single_hub_endpoint(&config.hub_airport));
//! ```

#[allow(clippy::module_inception)]
pub mod flight;
pub mod generator;
pub mod reference;

// Re-export all public types for convenience
pub use flight::*;
pub use generator::*;
