//! Core types and identifiers for the airport operations simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Identifiers**: per-emission event IDs and the flight designator key
//! - **Enums**: flight lifecycle status, sink kinds, delivery policies
//! - **Configuration**: simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use airport_ops_simulator::types::*;
//!
//! let designator = FlightDesignator::new("AI", 1234);
//! assert_eq!(designator.to_string(), "AI1234");
//!
//! let status: FlightStatus = "  EN-ROUTE ".parse().unwrap();
//! assert_eq!(status, FlightStatus::EnRoute);
//!
//! let config = SimulationConfig {
//!     max_active_flights: 10,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
