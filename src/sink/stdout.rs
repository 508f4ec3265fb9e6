//! Standard output sink

use std::io::{self, Write};

use super::{Sink, SinkResult};

/// Prints each record as one JSON line on stdout
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Create a stdout sink
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn name(&self) -> &str {
        "stdout"
    }

    fn probe(&mut self) -> SinkResult<()> {
        Ok(())
    }

    fn send(&mut self, payload: &[u8], _partition_key: &str) -> SinkResult<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(payload)?;
        handle.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> SinkResult<()> {
        io::stdout().flush()?;
        Ok(())
    }
}
