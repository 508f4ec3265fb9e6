//! Configuration structures for the airport operations simulator
//!
//! This module contains the simulation configuration structure and validation logic
//! used to control the behavior and parameters of the simulation system. All values
//! are read once at startup and stay fixed for the lifetime of a run.

use super::{DeliveryPolicy, SinkKind};
use chrono::{DateTime, Datelike, Duration, Utc};
use clap::Parser;
use rand::distributions::WeightedIndex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default hub and network constants
pub mod defaults {
    /// Hub airport at one end of every route
    pub const HUB_AIRPORT: &str = "AMD";

    /// Hub latitude, the starting position of every flight
    pub const HUB_LATITUDE: f64 = 23.0733;

    /// Hub longitude, the starting position of every flight
    pub const HUB_LONGITUDE: f64 = 72.6342;

    /// Spoke airports at the other end of every route
    pub const SPOKE_AIRPORTS: [&str; 12] =
        ["BOM", "DEL", "BLR", "MAA", "CCU", "HYD", "DXB", "SIN", "LHR", "DOH", "AUH", "KUL"];

    /// Number of flights kept active at the start of each update phase
    pub const MAX_ACTIVE_FLIGHTS: usize = 25;

    /// Upper bound on the active fleet size
    pub const MAX_FLEET_CAPACITY: usize = 10_000;

    /// Simulated minutes added to the clock per tick
    pub const TIME_STEP_MINUTES: i64 = 10;

    /// Largest accepted time step, one simulated day
    pub const MAX_TIME_STEP_MINUTES: i64 = 1_440;

    /// Real seconds slept between ticks
    pub const TICK_INTERVAL_SECS: f64 = 1.0;

    /// Largest accepted tick interval, one hour
    pub const MAX_TICK_INTERVAL_SECS: f64 = 3_600.0;

    /// Compressed minutes between pushback and cruise
    pub const TAXI_WINDOW_MINUTES: i64 = 20;

    /// Largest accepted taxi window, one simulated day
    pub const MAX_TAXI_WINDOW_MINUTES: i64 = 1_440;

    /// Accepted calendar years for an explicit start time
    pub const START_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

    /// Weights for the initial status draw: scheduled, departing, en-route, landed
    pub const INITIAL_STATUS_WEIGHTS: [u32; 4] = [30, 25, 35, 10];

    /// Source system tag stamped on every record
    pub const SOURCE_SYSTEM_ID: &str = "simulator-v8.0-time-compressed";
}

/// Probabilities controlling the deliberate variance in emitted records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MessinessConfig {
    /// Chance that the status string is padded and re-cased (default: 0.2)
    pub status_mess_probability: f64,
    /// Chance that each optional telemetry field is present (default: 0.9)
    pub optional_field_presence: f64,
}

impl Default for MessinessConfig {
    fn default() -> Self {
        Self { status_mess_probability: 0.2, optional_field_presence: 0.9 }
    }
}

/// Where and how records are delivered
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SinkConfig {
    /// Sink adapter to use
    pub kind: SinkKind,
    /// Output file for the file sink
    pub path: Option<String>,
    /// Ingestion URL for the HTTP sink
    pub endpoint: Option<String>,
    /// Stream name passed to the HTTP sink
    pub stream_name: Option<String>,
    /// Region passed to the HTTP sink
    pub region: Option<String>,
    /// Request timeout for the HTTP sink, in seconds
    pub timeout_secs: u64,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            kind: SinkKind::Stdout,
            path: None,
            endpoint: None,
            stream_name: None,
            region: None,
            timeout_secs: 10,
        }
    }
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "airport-ops-simulator",
    version,
    about = "Airport Ops Simulator - Streams time-compressed flight-operations events",
    long_about = "Simulates a hub-and-spoke airline network on a compressed clock and streams one deliberately messy JSON event per active flight per tick.

EXAMPLES:
    # Run with default settings, printing events to stdout
    airport-ops-simulator

    # Use a configuration file
    airport-ops-simulator --config config.json

    # Stream to an HTTP ingestion endpoint
    airport-ops-simulator --sink http --sink-endpoint http://localhost:8080/records --stream-name flights

    # Deterministic, bounded run written to a file
    airport-ops-simulator --seed 42 --max-ticks 100 --tick-interval-secs 0 --sink file --sink-path events.jsonl

    # Generate configuration template
    airport-ops-simulator --print-config > my-config.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments and environment variables (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Hub airport code
    #[arg(long, help = "Hub airport IATA code (default: AMD)")]
    pub hub_airport: Option<String>,

    /// Spoke airport codes
    #[arg(long, value_delimiter = ',', help = "Comma-separated spoke airport IATA codes")]
    pub spoke_airports: Option<Vec<String>>,

    /// Number of flights kept active
    #[arg(
        long,
        help = "Number of active flights",
        long_help = "Target number of flights kept active at the start of every tick. Must be greater than 0. Default: 25"
    )]
    pub max_active_flights: Option<usize>,

    /// Simulated minutes per tick
    #[arg(long, help = "Simulated minutes advanced per tick (default: 10)")]
    pub time_step_minutes: Option<i64>,

    /// Real seconds between ticks
    #[arg(long, env = "SIMULATOR_SLEEP_TIME", help = "Real seconds slept between ticks (default: 1.0)")]
    pub tick_interval_secs: Option<f64>,

    /// Compressed taxi window in minutes
    #[arg(long, help = "Compressed minutes from pushback to cruise (default: 20)")]
    pub taxi_window_minutes: Option<i64>,

    /// Simulation start time
    #[arg(long, help = "Simulation start time, RFC 3339 (default: now)")]
    pub start_time: Option<DateTime<Utc>>,

    /// Stop after this many ticks
    #[arg(long, help = "Stop after this many ticks (default: run until interrupted)")]
    pub max_ticks: Option<u64>,

    /// Random seed for reproducible results
    #[arg(
        long,
        help = "Random seed for reproducible results (event ids included)",
        long_help = "Random seed for reproducible results.

Every random draw comes from this seed, event ids included, so two runs with the same seed emit the same event_id values. Use a fresh seed (or none) when both runs feed the same downstream store."
    )]
    pub seed: Option<u64>,

    /// Source system tag
    #[arg(long, help = "Source system identifier stamped on every record")]
    pub source_system_id: Option<String>,

    /// Delivery failure policy
    #[arg(
        long,
        help = "Delivery failure policy (fail-fast-tick, skip-and-continue, halt)",
        long_help = "What to do when the sink rejects a record. fail-fast-tick stops the current tick's deliveries, skip-and-continue keeps going, halt stops the simulation. Default: fail-fast-tick"
    )]
    pub delivery_policy: Option<DeliveryPolicy>,

    /// Status re-casing probability
    #[arg(long, help = "Probability of padding and re-casing the status string (0.0-1.0)")]
    pub status_mess_probability: Option<f64>,

    /// Optional telemetry presence probability
    #[arg(long, help = "Probability that optional telemetry fields are present (0.0-1.0)")]
    pub optional_field_presence: Option<f64>,

    /// Sink kind
    #[arg(long, help = "Sink for generated events (stdout, file or http)")]
    pub sink: Option<SinkKind>,

    /// File sink output path
    #[arg(long, help = "Output path for the file sink")]
    pub sink_path: Option<String>,

    /// HTTP sink endpoint
    #[arg(long, help = "Ingestion URL for the http sink")]
    pub sink_endpoint: Option<String>,

    /// Stream name
    #[arg(long, env = "SIMULATOR_STREAM_NAME", help = "Stream name for the http sink")]
    pub stream_name: Option<String>,

    /// Sink region
    #[arg(long, env = "SIMULATOR_REGION", help = "Region for the http sink")]
    pub region: Option<String>,

    /// HTTP sink timeout
    #[arg(long, help = "Request timeout for the http sink, in seconds")]
    pub sink_timeout_secs: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Emit logs as JSON
    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    /// Also write logs to daily rolling files in this directory
    #[arg(long, help = "Directory for daily rolling log files")]
    pub log_dir: Option<String>,

    /// Explicit tracing filter directives
    #[arg(
        long,
        help = "Tracing filter directives, overriding RUST_LOG and -v/-d (e.g. airport_ops_simulator::sink=debug)"
    )]
    pub log_filter: Option<String>,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Hub airport code
    pub hub_airport: Option<String>,
    /// Hub latitude
    pub hub_latitude: Option<f64>,
    /// Hub longitude
    pub hub_longitude: Option<f64>,
    /// Spoke airport codes
    pub spoke_airports: Option<Vec<String>>,
    /// Number of flights kept active
    pub max_active_flights: Option<usize>,
    /// Simulated minutes per tick
    pub time_step_minutes: Option<i64>,
    /// Real seconds between ticks
    pub tick_interval_secs: Option<f64>,
    /// Compressed taxi window in minutes
    pub taxi_window_minutes: Option<i64>,
    /// Initial status weights: scheduled, departing, en-route, landed
    pub initial_status_weights: Option<[u32; 4]>,
    /// Simulation start time
    pub start_time: Option<DateTime<Utc>>,
    /// Stop after this many ticks
    pub max_ticks: Option<u64>,
    /// Random seed for reproducible results
    pub seed: Option<u64>,
    /// Source system tag
    pub source_system_id: Option<String>,
    /// Delivery failure policy
    pub delivery_policy: Option<DeliveryPolicy>,
    /// Record variance probabilities
    pub messiness: Option<MessinessConfig>,
    /// Sink settings
    pub sink: Option<SinkConfig>,
}

/// Configuration for the airport operations simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Hub airport code, one endpoint of every route
    pub hub_airport: String,

    /// Hub latitude in degrees
    pub hub_latitude: f64,

    /// Hub longitude in degrees
    pub hub_longitude: f64,

    /// Spoke airport codes
    pub spoke_airports: Vec<String>,

    /// Number of flights kept active at the start of each update phase
    pub max_active_flights: usize,

    /// Simulated minutes added to the clock per tick
    pub time_step_minutes: i64,

    /// Real seconds slept between ticks
    pub tick_interval_secs: f64,

    /// Compressed minutes between actual departure and cruise
    pub taxi_window_minutes: i64,

    /// Relative weights of scheduled, departing, en-route and landed for new flights
    pub initial_status_weights: [u32; 4],

    /// Simulation clock at startup (defaults to wall-clock now)
    pub start_time: Option<DateTime<Utc>>,

    /// Stop after this many ticks (runs until interrupted when unset)
    pub max_ticks: Option<u64>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Source system tag stamped on every record
    pub source_system_id: String,

    /// What to do when the sink rejects a record
    pub delivery_policy: DeliveryPolicy,

    /// Record variance probabilities
    pub messiness: MessinessConfig,

    /// Sink settings
    pub sink: SinkConfig,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Airport code is not three uppercase letters
    #[error("Invalid airport code '{0}': expected three uppercase letters")]
    InvalidAirportCode(String),

    /// Hub also listed as a spoke
    #[error("Hub airport {0} must not appear in the spoke set")]
    HubInSpokeSet(String),

    /// No spoke airports configured
    #[error("At least one spoke airport is required")]
    EmptySpokeSet,

    /// Active flight count is invalid
    #[error("Active flight count must be between 1 and 10000, got {0}")]
    InvalidFlightCount(usize),

    /// Time step is invalid
    #[error("Time step must be between 1 and 1440 minutes, got {0}")]
    InvalidTimeStep(i64),

    /// Tick interval is invalid
    #[error("Tick interval must be between 0 and 3600 seconds, got {0}")]
    InvalidTickInterval(f64),

    /// Taxi window is invalid
    #[error("Taxi window must be between 1 and 1440 minutes, got {0}")]
    InvalidTaxiWindow(i64),

    /// Start time outside the supported calendar
    #[error("Start time {0} is outside years 1 to 9999")]
    InvalidStartTime(DateTime<Utc>),

    /// Initial status weights cannot drive a weighted draw
    #[error("Invalid initial status weights {weights:?}: {reason}")]
    InvalidStatusWeights {
        /// Weights as configured
        weights: [u32; 4],
        /// Why the draw rejected them
        reason: String,
    },

    /// Hub coordinates out of range
    #[error("Invalid hub coordinates: ({lat}, {lon})")]
    InvalidCoordinates {
        /// Latitude in degrees
        lat: f64,
        /// Longitude in degrees
        lon: f64,
    },

    /// Percentage value is out of range
    #[error("Invalid percentage for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidPercentage {
        /// Name of the field with invalid percentage
        field: String,
        /// The invalid percentage value
        value: f64,
    },

    /// File sink without an output path
    #[error("The file sink requires an output path")]
    MissingSinkPath,

    /// HTTP sink without an endpoint
    #[error("The http sink requires an endpoint URL")]
    MissingSinkEndpoint,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            hub_airport: defaults::HUB_AIRPORT.to_string(),
            hub_latitude: defaults::HUB_LATITUDE,
            hub_longitude: defaults::HUB_LONGITUDE,
            spoke_airports: defaults::SPOKE_AIRPORTS.iter().map(|s| s.to_string()).collect(),
            max_active_flights: defaults::MAX_ACTIVE_FLIGHTS,
            time_step_minutes: defaults::TIME_STEP_MINUTES,
            tick_interval_secs: defaults::TICK_INTERVAL_SECS,
            taxi_window_minutes: defaults::TAXI_WINDOW_MINUTES,
            initial_status_weights: defaults::INITIAL_STATUS_WEIGHTS,
            start_time: None,
            max_ticks: None,
            seed: None,
            source_system_id: defaults::SOURCE_SYSTEM_ID.to_string(),
            delivery_policy: DeliveryPolicy::default(),
            messiness: MessinessConfig::default(),
            sink: SinkConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            hub_airport: config_file.hub_airport.unwrap_or(defaults.hub_airport),
            hub_latitude: config_file.hub_latitude.unwrap_or(defaults.hub_latitude),
            hub_longitude: config_file.hub_longitude.unwrap_or(defaults.hub_longitude),
            spoke_airports: config_file.spoke_airports.unwrap_or(defaults.spoke_airports),
            max_active_flights: config_file
                .max_active_flights
                .unwrap_or(defaults.max_active_flights),
            time_step_minutes: config_file.time_step_minutes.unwrap_or(defaults.time_step_minutes),
            tick_interval_secs: config_file
                .tick_interval_secs
                .unwrap_or(defaults.tick_interval_secs),
            taxi_window_minutes: config_file
                .taxi_window_minutes
                .unwrap_or(defaults.taxi_window_minutes),
            initial_status_weights: config_file
                .initial_status_weights
                .unwrap_or(defaults.initial_status_weights),
            start_time: config_file.start_time.or(defaults.start_time),
            max_ticks: config_file.max_ticks.or(defaults.max_ticks),
            seed: config_file.seed.or(defaults.seed),
            source_system_id: config_file.source_system_id.unwrap_or(defaults.source_system_id),
            delivery_policy: config_file.delivery_policy.unwrap_or(defaults.delivery_policy),
            messiness: config_file.messiness.unwrap_or(defaults.messiness),
            sink: config_file.sink.unwrap_or(defaults.sink),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.hub_airport {
            config.hub_airport = value.to_uppercase();
        }
        if let Some(value) = args.spoke_airports {
            config.spoke_airports = value.into_iter().map(|s| s.trim().to_uppercase()).collect();
        }
        if let Some(value) = args.max_active_flights {
            config.max_active_flights = value;
        }
        if let Some(value) = args.time_step_minutes {
            config.time_step_minutes = value;
        }
        if let Some(value) = args.tick_interval_secs {
            config.tick_interval_secs = value;
        }
        if let Some(value) = args.taxi_window_minutes {
            config.taxi_window_minutes = value;
        }
        if let Some(value) = args.start_time {
            config.start_time = Some(value);
        }
        if let Some(value) = args.max_ticks {
            config.max_ticks = Some(value);
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.source_system_id {
            config.source_system_id = value;
        }
        if let Some(value) = args.delivery_policy {
            config.delivery_policy = value;
        }
        if let Some(value) = args.status_mess_probability {
            config.messiness.status_mess_probability = value;
        }
        if let Some(value) = args.optional_field_presence {
            config.messiness.optional_field_presence = value;
        }

        if let Some(value) = args.sink {
            config.sink.kind = value;
        }
        if let Some(value) = args.sink_path {
            config.sink.path = Some(value);
        }
        if let Some(value) = args.sink_endpoint {
            config.sink.endpoint = Some(value);
        }
        if let Some(value) = args.stream_name {
            config.sink.stream_name = Some(value);
        }
        if let Some(value) = args.region {
            config.sink.region = Some(value);
        }
        if let Some(value) = args.sink_timeout_secs {
            config.sink.timeout_secs = value;
        }
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        Self::validate_airport_code(&self.hub_airport)?;

        if self.spoke_airports.is_empty() {
            return Err(ConfigValidationError::EmptySpokeSet);
        }
        for spoke in &self.spoke_airports {
            Self::validate_airport_code(spoke)?;
        }
        if self.spoke_airports.iter().any(|spoke| *spoke == self.hub_airport) {
            return Err(ConfigValidationError::HubInSpokeSet(self.hub_airport.clone()));
        }

        if !(-90.0..=90.0).contains(&self.hub_latitude)
            || !(-180.0..=180.0).contains(&self.hub_longitude)
        {
            return Err(ConfigValidationError::InvalidCoordinates {
                lat: self.hub_latitude,
                lon: self.hub_longitude,
            });
        }

        if self.max_active_flights == 0 || self.max_active_flights > defaults::MAX_FLEET_CAPACITY {
            return Err(ConfigValidationError::InvalidFlightCount(self.max_active_flights));
        }

        self.time_step()?;
        self.tick_interval()?;
        self.taxi_window()?;

        if let Some(start) = self.start_time {
            if !defaults::START_YEARS.contains(&start.year()) {
                return Err(ConfigValidationError::InvalidStartTime(start));
            }
        }

        self.initial_status_distribution()?;

        self.validate_percentage(
            "status_mess_probability",
            self.messiness.status_mess_probability,
        )?;
        self.validate_percentage(
            "optional_field_presence",
            self.messiness.optional_field_presence,
        )?;

        match self.sink.kind {
            SinkKind::File if self.sink.path.is_none() => {
                return Err(ConfigValidationError::MissingSinkPath)
            }
            SinkKind::Http if self.sink.endpoint.is_none() => {
                return Err(ConfigValidationError::MissingSinkEndpoint)
            }
            _ => {}
        }

        Ok(())
    }

    /// Helper method to validate airport codes
    fn validate_airport_code(code: &str) -> Result<(), ConfigValidationError> {
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigValidationError::InvalidAirportCode(code.to_string()));
        }
        Ok(())
    }

    /// Helper method to validate percentage values
    fn validate_percentage(&self, field: &str, value: f64) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigValidationError::InvalidPercentage {
                field: field.to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Simulated time added per tick
    pub fn time_step(&self) -> Result<Duration, ConfigValidationError> {
        Self::bounded_minutes(self.time_step_minutes, defaults::MAX_TIME_STEP_MINUTES)
            .ok_or(ConfigValidationError::InvalidTimeStep(self.time_step_minutes))
    }

    /// Compressed taxi window
    pub fn taxi_window(&self) -> Result<Duration, ConfigValidationError> {
        Self::bounded_minutes(self.taxi_window_minutes, defaults::MAX_TAXI_WINDOW_MINUTES)
            .ok_or(ConfigValidationError::InvalidTaxiWindow(self.taxi_window_minutes))
    }

    /// Real time slept between ticks
    pub fn tick_interval(&self) -> Result<std::time::Duration, ConfigValidationError> {
        if !(0.0..=defaults::MAX_TICK_INTERVAL_SECS).contains(&self.tick_interval_secs) {
            return Err(ConfigValidationError::InvalidTickInterval(self.tick_interval_secs));
        }
        std::time::Duration::try_from_secs_f64(self.tick_interval_secs)
            .map_err(|_| ConfigValidationError::InvalidTickInterval(self.tick_interval_secs))
    }

    /// Weighted distribution over [`FlightStatus::ALL`](crate::types::FlightStatus::ALL) for new flights
    pub fn initial_status_distribution(&self) -> Result<WeightedIndex<u32>, ConfigValidationError> {
        WeightedIndex::new(self.initial_status_weights).map_err(|e| {
            ConfigValidationError::InvalidStatusWeights {
                weights: self.initial_status_weights,
                reason: e.to_string(),
            }
        })
    }

    fn bounded_minutes(minutes: i64, max: i64) -> Option<Duration> {
        if !(1..=max).contains(&minutes) {
            return None;
        }
        Duration::try_minutes(minutes)
    }
}
