//! HTTP ingestion sink
//!
//! Posts each record as its own request body. The partition key, stream name and
//! region travel as headers so a thin gateway can forward them to a keyed stream.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

use super::{Sink, SinkError, SinkResult};

/// Header carrying the partition key
pub const PARTITION_KEY_HEADER: &str = "x-partition-key";
/// Header carrying the stream name
pub const STREAM_NAME_HEADER: &str = "x-stream-name";
/// Header carrying the region
pub const REGION_HEADER: &str = "x-region";

/// Blocking HTTP sink
#[derive(Debug)]
pub struct HttpSink {
    client: Client,
    endpoint: String,
    stream_name: Option<String>,
    region: Option<String>,
}

impl HttpSink {
    /// Build a client for `endpoint` with a per-request timeout
    pub fn new(
        endpoint: impl Into<String>,
        stream_name: Option<String>,
        region: Option<String>,
        timeout: Duration,
    ) -> SinkResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint: endpoint.into(), stream_name, region })
    }

    /// Ingestion URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Sink for HttpSink {
    fn name(&self) -> &str {
        "http"
    }

    fn probe(&mut self) -> SinkResult<()> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .map_err(|e| SinkError::Unavailable(format!("{}: {}", self.endpoint, e)))?;

        if response.status().is_server_error() {
            return Err(SinkError::Unavailable(format!(
                "{} answered {}",
                self.endpoint,
                response.status()
            )));
        }
        Ok(())
    }

    fn send(&mut self, payload: &[u8], partition_key: &str) -> SinkResult<()> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(PARTITION_KEY_HEADER, partition_key)
            .body(payload.to_vec());
        if let Some(stream_name) = &self.stream_name {
            request = request.header(STREAM_NAME_HEADER, stream_name);
        }
        if let Some(region) = &self.region {
            request = request.header(REGION_HEADER, region);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SinkError::Rejected {
                partition_key: partition_key.to_string(),
                status: status.as_u16(),
            });
        }

        debug!("Delivered record for {} ({})", partition_key, status);
        Ok(())
    }
}
