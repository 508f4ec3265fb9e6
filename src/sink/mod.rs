//! Record delivery
//!
//! A [`Sink`] accepts one serialized record at a time together with its partition key.
//! Records sharing a key must reach the destination in submission order, which every
//! adapter here gets for free by sending synchronously.
//!
//! # Adapters
//!
//! - **StdoutSink**: JSON lines on standard output
//! - **FileSink**: JSON lines appended to a file
//! - **HttpSink**: one POST per record to an ingestion endpoint

use std::fmt;
use thiserror::Error;
use tracing::info;

use crate::types::{SinkConfig, SinkKind};

pub mod file;
pub mod http;
pub mod stdout;

pub use file::FileSink;
pub use http::HttpSink;
pub use stdout::StdoutSink;

/// Errors raised while establishing or using a sink
#[derive(Debug, Error)]
pub enum SinkError {
    /// The destination cannot be reached
    #[error("Sink unavailable: {0}")]
    Unavailable(String),

    /// The destination refused a record
    #[error("Record for {partition_key} rejected with status {status}")]
    Rejected {
        /// Partition key of the refused record
        partition_key: String,
        /// Status reported by the destination
        status: u16,
    },

    /// I/O error
    #[error("Sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Record could not be serialized
    #[error("Failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Destination for serialized records
pub trait Sink: fmt::Debug {
    /// Short adapter name for logs
    fn name(&self) -> &str;

    /// Check that the destination is reachable
    fn probe(&mut self) -> SinkResult<()>;

    /// Deliver one record keyed by `partition_key`
    fn send(&mut self, payload: &[u8], partition_key: &str) -> SinkResult<()>;

    /// Push out anything buffered
    fn flush(&mut self) -> SinkResult<()> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn probe(&mut self) -> SinkResult<()> {
        (**self).probe()
    }

    fn send(&mut self, payload: &[u8], partition_key: &str) -> SinkResult<()> {
        (**self).send(payload, partition_key)
    }

    fn flush(&mut self) -> SinkResult<()> {
        (**self).flush()
    }
}

/// Construct the configured sink and probe it once
///
/// Any failure here means the destination is unusable and the run must not start.
pub fn build_sink(config: &SinkConfig) -> SinkResult<Box<dyn Sink>> {
    let mut sink: Box<dyn Sink> = match config.kind {
        SinkKind::Stdout => Box::new(StdoutSink::new()),
        SinkKind::File => {
            let path = config
                .path
                .as_deref()
                .ok_or_else(|| SinkError::Unavailable("file sink requires a path".to_string()))?;
            let sink = FileSink::open(path)?;
            info!("Appending records to {}", sink.path().display());
            Box::new(sink)
        }
        SinkKind::Http => {
            let endpoint = config.endpoint.as_deref().ok_or_else(|| {
                SinkError::Unavailable("http sink requires an endpoint".to_string())
            })?;
            let sink = HttpSink::new(
                endpoint,
                config.stream_name.clone(),
                config.region.clone(),
                std::time::Duration::from_secs(config.timeout_secs),
            )?;
            info!("Posting records to {}", sink.endpoint());
            Box::new(sink)
        }
    };

    sink.probe()?;
    info!("Sink '{}' is reachable", sink.name());
    Ok(sink)
}
