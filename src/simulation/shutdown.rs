//! Cooperative cancellation
//!
//! The run loop checks a [`ShutdownSignal`] at iteration boundaries only; a tick that
//! has started always finishes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

const SLEEP_SLICE: Duration = Duration::from_millis(50);

/// Shared stop flag
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    flag: Arc<AtomicBool>,
}

impl ShutdownSignal {
    /// Create an untriggered signal
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a stop before the next tick
    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether a stop was requested
    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Trigger this signal on Ctrl-C or SIGTERM
    pub fn install_ctrlc_handler(&self) -> Result<(), ctrlc::Error> {
        let signal = self.clone();
        ctrlc::set_handler(move || {
            if signal.is_triggered() {
                warn!("Second interrupt received, exiting immediately");
                std::process::exit(130);
            }
            info!("Interrupt received, stopping after the current tick");
            signal.trigger();
        })
    }

    /// Sleep for `duration` in short slices, returning early once triggered
    ///
    /// Returns `true` when the full duration elapsed without a stop request.
    pub fn sleep(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        loop {
            if self.is_triggered() {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            thread::sleep(SLEEP_SLICE.min(deadline - now));
        }
    }
}
