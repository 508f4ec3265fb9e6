//! Airport Ops Simulator
//!
//! A synthetic flight-operations event generator for a hub-and-spoke airline network.
//! A fixed-size fleet of flights moves through its lifecycle on a compressed clock,
//! and every tick each flight emits one deliberately messy JSON record to a sink.
//!
//! # Overview
//!
//! The records are meant to exercise downstream cleaning and loading logic, so values
//! are plausible rather than physically accurate and the encoding varies on purpose.
//!
//! ## Key Features
//!
//! - **Flight Lifecycle**: `scheduled -> departing -> en-route -> landed`, one step per tick
//! - **Fixed Capacity Fleet**: landed flights are retired and replaced every tick
//! - **Messiness Injection**: mixed timestamp encodings, re-cased status, optional nulls
//! - **Pluggable Sinks**: stdout, JSON-lines file or HTTP ingestion endpoint
//! - **Deterministic Runs**: seeded random source and injectable start time
//!
//! ## Quick Start
//!
//! ```rust
//! use airport_ops_simulator::*;
//!
//! let config = SimulationConfig {
//!     max_ticks: Some(3),
//!     tick_interval_secs: 0.0,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut orchestrator = SimulationOrchestrator::new(config)?;
//! let mut sink = StdoutSink::new();
//! orchestrator.run(&mut sink, &ShutdownSignal::new())?;
//!
//! println!("{}", orchestrator.statistics().summary());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Core types, identifiers, and configuration
//! - [`flight`]: Flight entity, state machine and generator
//! - [`events`]: Event record shape and synthesis
//! - [`sink`]: Record delivery adapters
//! - [`simulation`]: Clock, fleet, orchestration and control
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │   Flight    │    │   Events    │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ Lifecycle   │◄───┤ Synthesizer │
//! │ Enums       │    │ Generator   │    │ Messiness   │
//! │ Config      │    │ Reference   │    │ Record      │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                   ▲                   ▲
//!        │                   │                   │
//! ┌─────────────┐    ┌─────────────────────────────────┐
//! │    Sink     │    │           Simulation            │
//! │             │    │                                 │
//! │ Stdout      │◄───┤ Clock, Fleet, Orchestrator,     │
//! │ File, HTTP  │    │ Statistics, Shutdown            │
//! └─────────────┘    └─────────────────────────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod events;
pub mod flight;
pub mod simulation;
pub mod sink;
pub mod types;

// Re-export commonly used types for convenience
pub use events::{EventSynthesizer, FlightEvent, RenderedTimestamp, TimestampFormat};
pub use flight::{Flight, FlightGenerator, FlightSchedule, Route, StatusTransition};
pub use simulation::{
    Fleet, LoggingConfig, ShutdownSignal, SimulationClock, SimulationError,
    SimulationOrchestrator, SimulationResult, SimulationStatistics, StopReason, TickReport,
};
pub use sink::{build_sink, FileSink, HttpSink, Sink, SinkError, StdoutSink};
pub use types::{
    DeliveryPolicy, EventId, FlightDesignator, FlightStatus, SimulationConfig, SinkKind,
};
