//! Windowed throughput estimator.
//!
//! Bytes are accumulated over a sampling window; once a chunk arrives at least
//! `min_window` after the window opened, the rate is recomputed and a new
//! window starts with the next chunk. Between rebases the last rate is kept so
//! rapid small chunks don't make the displayed speed flicker.

use std::time::{Duration, Instant};

/// Minimum sampling window before the rate is recomputed.
pub const DEFAULT_MIN_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct ThroughputEstimator {
    min_window: Duration,
    window_bytes: u64,
    /// `None` until the first chunk of the current window arrives.
    window_start: Option<Instant>,
    current_bps: u64,
}

impl Default for ThroughputEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WINDOW)
    }
}

impl ThroughputEstimator {
    pub fn new(min_window: Duration) -> Self {
        Self {
            min_window,
            window_bytes: 0,
            window_start: None,
            current_bps: 0,
        }
    }

    /// Feed a chunk of `len` bytes that arrived at `at`. Returns the current rate.
    pub fn record(&mut self, len: u64, at: Instant) -> u64 {
        let start = *self.window_start.get_or_insert(at);
        let elapsed = at.saturating_duration_since(start);
        self.window_bytes += len;

        if !elapsed.is_zero() && elapsed >= self.min_window {
            self.current_bps = (self.window_bytes as f64 / elapsed.as_secs_f64()) as u64;
            self.window_bytes = 0;
            self.window_start = None;
        }
        self.current_bps
    }

    /// Last computed rate in bytes per second (0 before the first rebase).
    pub fn bytes_per_sec(&self) -> u64 {
        self.current_bps
    }
}
