//! Event record synthesis
//!
//! This module turns flight state into the records streamed to the sink.
//!
//! # Overview
//!
//! - **FlightEvent**: the nested identity/route/operational/telemetry record
//! - **EventSynthesizer**: builds a record from a flight at the current clock
//! - **messiness**: timestamp rendering strategies and status re-casing that give
//!   downstream cleaning logic heterogeneous input
//!
//! # Usage Example
//!
//! ```rust
//! use airport_ops_simulator::events::*;
//! use airport_ops_simulator::flight::FlightGenerator;
//! use airport_ops_simulator::types::SimulationConfig;
//! use chrono::Utc;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = SimulationConfig::default();
//! let mut rng = StdRng::seed_from_u64(1);
//! let now = Utc::now();
//!
//! let mut flight = FlightGenerator::new(&config).unwrap().generate(now, &mut rng);
//! let synthesizer = EventSynthesizer::new(&config);
//! let update = flight.update(now, &synthesizer, &mut rng);
//!
//! assert_eq!(update.event.partition_key(), flight.designator().as_str());
//! ```

pub mod messiness;
pub mod record;
pub mod synthesizer;

// Re-export all public types for convenience
pub use messiness::*;
pub use record::*;
pub use synthesizer::*;
