//! Simulation orchestration and control
//!
//! This module contains the clock driver, the active fleet, the orchestrator that runs
//! the tick loop, statistics collection, cancellation and error handling.
//!
//! # Overview
//!
//! - **SimulationOrchestrator**: owns the simulation context and runs the tick loop
//! - **SimulationClock**: the compressed logical clock, sole timing authority
//! - **Fleet**: designator-keyed active flights with reap and replenish
//! - **ShutdownSignal**: cooperative stop flag checked between ticks
//! - **SimulationStatistics**: counters for the final report
//! - **SimulationError**: error handling for simulation operations
//!
//! # Usage Example
//!
//! ```rust
//! use airport_ops_simulator::simulation::*;
//! use airport_ops_simulator::sink::StdoutSink;
//! use airport_ops_simulator::types::SimulationConfig;
//!
//! let config = SimulationConfig {
//!     max_active_flights: 3,
//!     max_ticks: Some(2),
//!     tick_interval_secs: 0.0,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//!
//! let mut orchestrator = SimulationOrchestrator::new(config).unwrap();
//! let mut sink = StdoutSink::new();
//! orchestrator.run(&mut sink, &ShutdownSignal::new()).unwrap();
//!
//! assert_eq!(orchestrator.statistics().records_emitted, 6);
//! ```

pub mod clock;
pub mod error;
pub mod fleet;
pub mod logging;
pub mod orchestrator;
pub mod shutdown;
pub mod statistics;

// Re-export all public types for convenience
pub use clock::*;
pub use error::*;
pub use fleet::*;
pub use logging::*;
pub use orchestrator::*;
pub use shutdown::*;
pub use statistics::*;
