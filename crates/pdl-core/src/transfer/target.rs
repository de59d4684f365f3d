//! What to download and how to pace it.

use std::path::PathBuf;
use std::time::Duration;

/// Ordered source URLs and the single output they are concatenated into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferTarget {
    pub urls: Vec<String>,
    pub output: PathBuf,
}

impl TransferTarget {
    pub fn new<I, U>(urls: I, output: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            output: output.into(),
        }
    }
}

/// Read granularity and display cadence for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferSettings {
    /// Bytes requested per read. Zero is treated as 1.
    pub chunk_size: usize,
    /// Sleep before every read; zero disables. Acts as a crude throughput cap.
    pub intentional_delay: Duration,
    /// Minimum spacing between rendered progress lines.
    pub display_interval: Duration,
}

impl Default for TransferSettings {
    fn default() -> Self {
        Self {
            chunk_size: 8 * 1024,
            intentional_delay: Duration::ZERO,
            display_interval: Duration::from_millis(100),
        }
    }
}
