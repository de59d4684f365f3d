//! Outcome of one orchestration run.

use std::path::PathBuf;

/// A URL that was fetched into a part file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartSummary {
    /// 1-based attempt number; also the part file suffix.
    pub sequence: u32,
    pub url: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// A URL that could not be opened and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedUrl {
    pub sequence: u32,
    pub url: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferReport {
    /// Number of URLs attempted (successful or skipped).
    pub attempted: usize,
    /// Successful transfers in sequence order.
    pub parts: Vec<PartSummary>,
    pub skipped: Vec<SkippedUrl>,
    /// Bytes written to the final output.
    pub total_bytes: u64,
}

impl TransferReport {
    /// The run's boolean result: false only when there was nothing to do.
    /// A run where every URL was skipped still counts as success.
    pub fn is_success(&self) -> bool {
        self.attempted > 0
    }

    pub fn completed_count(&self) -> usize {
        self.parts.len()
    }

    /// True when URLs were given but none could be opened.
    pub fn all_skipped(&self) -> bool {
        self.attempted > 0 && self.parts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_failure() {
        let r = TransferReport::default();
        assert!(!r.is_success());
        assert!(!r.all_skipped());
    }

    #[test]
    fn all_skipped_is_still_success() {
        let r = TransferReport {
            attempted: 2,
            skipped: vec![
                SkippedUrl {
                    sequence: 1,
                    url: "a".into(),
                    reason: "HTTP 404".into(),
                },
                SkippedUrl {
                    sequence: 2,
                    url: "b".into(),
                    reason: "HTTP 500".into(),
                },
            ],
            ..Default::default()
        };
        assert!(r.is_success());
        assert!(r.all_skipped());
        assert_eq!(r.completed_count(), 0);
    }
}
