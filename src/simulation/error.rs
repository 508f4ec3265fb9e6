//! Error types and handling
//!
//! This module contains error types and error handling for the simulation.

use thiserror::Error;

use crate::sink::SinkError;
use crate::types::ConfigValidationError;

/// Errors that can occur during simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ConfigurationError(String),

    /// No usable sink could be established
    #[error("Could not establish sink: {0}")]
    SinkUnavailable(#[source] SinkError),

    /// A record could not be delivered and the run was halted
    #[error("Delivery failed: {0}")]
    DeliveryError(String),

    /// Time management error
    #[error("Time management error: {0}")]
    TimeError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<ConfigValidationError> for SimulationError {
    fn from(error: ConfigValidationError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl From<SinkError> for SimulationError {
    fn from(error: SinkError) -> Self {
        SimulationError::SinkUnavailable(error)
    }
}

impl SimulationError {
    /// Create a delivery error
    pub fn delivery_error(msg: impl Into<String>) -> Self {
        Self::DeliveryError(msg.into())
    }

    /// Create a time management error
    pub fn time_error(msg: impl Into<String>) -> Self {
        Self::TimeError(msg.into())
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimulationError::ConfigurationError(_) => false,
            SimulationError::SinkUnavailable(_) => false,
            SimulationError::DeliveryError(_) => true,
            SimulationError::TimeError(_) => false,
            SimulationError::IoError(_) => true,
            SimulationError::SerializationError(_) => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::SinkUnavailable(_) => "Sink",
            SimulationError::DeliveryError(_) => "Delivery",
            SimulationError::TimeError(_) => "Time Management",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
