//! Time-based display gate and spinner state.

use std::time::{Duration, Instant};

/// Spinner glyphs, cycled in order.
pub const SPINNER_FRAMES: [char; 3] = ['\\', '/', '-'];

/// Decides when a progress line may be redrawn, independent of how often
/// chunks arrive.
#[derive(Debug, Clone)]
pub struct DisplayThrottle {
    interval: Duration,
    last_display: Option<Instant>,
    frame: usize,
}

impl DisplayThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_display: None,
            frame: 0,
        }
    }

    /// Returns the next spinner frame if at least `interval` has passed since the
    /// last display (or nothing was displayed yet), otherwise `None`.
    pub fn poll(&mut self, at: Instant) -> Option<char> {
        if let Some(last) = self.last_display {
            if at.saturating_duration_since(last) < self.interval {
                return None;
            }
        }
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
        self.last_display = Some(at);
        Some(SPINNER_FRAMES[self.frame])
    }
}
