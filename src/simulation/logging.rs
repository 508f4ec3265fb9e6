//! Logging and tracing configuration
//!
//! Diagnostics go to stderr (and optionally a daily rolling file) so that stdout stays
//! reserved for records when the stdout sink is in use.

use std::io;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::types::config::CliArgs;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;
type InitError = Box<dyn std::error::Error + Send + Sync>;

/// How diagnostics are rendered on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleFormat {
    /// Single-line human readable output
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Maximum level for this crate's targets
    pub level: Level,
    /// Console rendering
    pub console: ConsoleFormat,
    /// Directory for daily JSON log files; file logging is off when unset
    pub log_directory: Option<String>,
    /// Log file prefix
    pub log_file_prefix: String,
    /// Log a line when the tick and run spans close, with their busy time
    pub span_timing: bool,
    /// Colored console output
    pub ansi: bool,
    /// Explicit filter directives, overriding `RUST_LOG` and `level`
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            console: ConsoleFormat::Compact,
            log_directory: None,
            log_file_prefix: "airport-ops-simulator".to_string(),
            span_timing: false,
            ansi: true,
            env_filter: None,
        }
    }
}

/// Keeps the non-blocking writers flushing; drop it only at process exit
#[derive(Debug)]
pub struct LoggingGuard {
    _guards: Vec<WorkerGuard>,
}

impl LoggingConfig {
    /// Warnings and delivery failures only
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the preset matching the command line flags
    ///
    /// `--debug` wins over `--verbose`; both turn on span timing.
    pub fn from_cli(args: &CliArgs) -> Self {
        let mut config = if args.debug {
            Self::new().with_level(Level::DEBUG).with_span_timing()
        } else if args.verbose {
            Self::new().with_level(Level::INFO).with_span_timing()
        } else {
            Self::new()
        };
        if args.json_logs {
            config = config.with_json_console();
        }
        if let Some(dir) = &args.log_dir {
            config = config.with_file_logging(dir.clone());
        }
        if let Some(filter) = &args.log_filter {
            config = config.with_env_filter(filter.clone());
        }
        config
    }

    /// Set the level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Render the console as JSON, without colors
    pub fn with_json_console(mut self) -> Self {
        self.console = ConsoleFormat::Json;
        self.ansi = false;
        self
    }

    /// Also write daily JSON files under `directory`
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Turn on span close events
    pub fn with_span_timing(mut self) -> Self {
        self.span_timing = true;
        self
    }

    /// Use explicit filter directives
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_timing {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    fn build_filter(&self) -> Result<EnvFilter, InitError> {
        if let Some(filter) = &self.env_filter {
            return Ok(EnvFilter::try_new(filter)?);
        }
        Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                self.level
            ))
        }))
    }

    fn console_layer(&self) -> (BoxedLayer, WorkerGuard) {
        let (writer, guard) = non_blocking(io::stderr());
        let layer = match self.console {
            ConsoleFormat::Json => fmt::layer()
                .json()
                .with_writer(writer)
                .with_span_events(self.span_events())
                .boxed(),
            ConsoleFormat::Compact => fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(self.ansi)
                .with_span_events(self.span_events())
                .boxed(),
        };
        (layer, guard)
    }

    /// Install the global subscriber
    ///
    /// Fails if the filter directives do not parse or a subscriber is already set.
    pub fn init(self) -> Result<LoggingGuard, InitError> {
        let env_filter = self.build_filter()?;
        let (console, console_guard) = self.console_layer();
        let mut guards = vec![console_guard];
        let mut layers = vec![console];

        if let Some(log_dir) = &self.log_directory {
            let (writer, guard) = non_blocking(rolling::daily(log_dir, &self.log_file_prefix));
            guards.push(guard);
            layers.push(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_span_events(self.span_events())
                    .boxed(),
            );
        }

        Registry::default().with(layers).with(env_filter).try_init()?;

        tracing::debug!("Logging initialized: {:?}", self);
        Ok(LoggingGuard { _guards: guards })
    }
}

/// Structured event tagged as coming from the tick loop
#[macro_export]
macro_rules! sim_event {
    ($level:ident, $message:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::$level!(
            message = $message,
            component = "fleet",
            $($key = $value,)*
        );
    };
    ($level:ident, $message:expr) => {
        tracing::$level!(
            message = $message,
            component = "fleet",
        );
    };
}

/// Span used to time one unit of loop work
#[macro_export]
macro_rules! perf_span {
    ($name:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::info_span!(
            $name,
            component = "timing",
            $($key = $value,)*
        )
    };
    ($name:expr) => {
        tracing::info_span!(
            $name,
            component = "timing",
        )
    };
}
