//! JSON-lines file sink

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{Sink, SinkResult};

/// Appends each record as one JSON line to a file
///
/// Each line reaches the file in a single write, so a full disk or revoked handle fails
/// the `send` for that record and never leaves half a line queued for the next one.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
    line: Vec<u8>,
}

impl FileSink {
    /// Open `path` for appending, creating it if missing
    pub fn open<P: AsRef<Path>>(path: P) -> SinkResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        debug!("Opened file sink at {}", path.display());
        Ok(Self { path, file, line: Vec::new() })
    }

    /// Output path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    fn probe(&mut self) -> SinkResult<()> {
        self.file.flush()?;
        Ok(())
    }

    fn send(&mut self, payload: &[u8], _partition_key: &str) -> SinkResult<()> {
        self.line.clear();
        self.line.extend_from_slice(payload);
        self.line.push(b'\n');
        self.file.write_all(&self.line)?;
        Ok(())
    }

    fn flush(&mut self) -> SinkResult<()> {
        self.file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_records_are_appended_as_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.jsonl");

        let mut sink = FileSink::open(&path).unwrap();
        sink.send(br#"{"a":1}"#, "AI101").unwrap();
        sink.send(br#"{"a":2}"#, "AI101").unwrap();
        sink.flush().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\"a\":1}\n{\"a\":2}\n");
    }

    #[test]
    fn test_reopen_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.jsonl");

        for value in 0..2 {
            let mut sink = FileSink::open(&path).unwrap();
            sink.send(format!("{}", value).as_bytes(), "K").unwrap();
            sink.flush().unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);
    }

    #[test]
    fn test_records_are_visible_before_flush() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.jsonl");

        let mut sink = FileSink::open(&path).unwrap();
        sink.send(br#"{"a":1}"#, "AI101").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n");
        assert_eq!(sink.path(), path.as_path());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_full_device_fails_each_send() {
        let mut sink = FileSink::open("/dev/full").unwrap();
        sink.probe().unwrap();

        assert!(sink.send(br#"{"a":1}"#, "AI101").is_err());
        assert!(sink.send(br#"{"a":2}"#, "AI102").is_err());
        assert!(sink.flush().is_ok());
    }

    #[test]
    fn test_open_in_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.jsonl");
        assert!(FileSink::open(path).is_err());
    }
}
