//! Progress snapshot, formatted fields, and line formatters.

use crate::units::best_fit_unit;

/// Decimal places used for every rendered size.
pub const DISPLAY_DECIMALS: usize = 2;

/// State captured at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub spinner: char,
    pub total_bytes: u64,
    pub bytes_per_sec: u64,
}

impl ProgressSnapshot {
    /// Converts total and rate to best-fit and byte-unit strings.
    pub fn formats(&self) -> RenderFormats {
        let total = best_fit_unit(self.total_bytes, 0);
        let speed = best_fit_unit(self.bytes_per_sec, 0);
        RenderFormats {
            spinner: self.spinner.to_string(),
            total_size: total.to_human_string(DISPLAY_DECIMALS),
            total_size_in_bytes: total.to_bytes_string(DISPLAY_DECIMALS),
            speed_per_second: speed.to_human_string(DISPLAY_DECIMALS),
            speed_per_second_in_bytes: speed.to_bytes_string(DISPLAY_DECIMALS),
        }
    }
}

/// Fully formatted fields handed to a [`Formatter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFormats {
    pub spinner: String,
    pub total_size: String,
    pub total_size_in_bytes: String,
    pub speed_per_second: String,
    pub speed_per_second_in_bytes: String,
}

/// Turns formatted fields into one display line. Must be pure.
pub trait Formatter {
    fn format(&self, formats: &RenderFormats) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&RenderFormats) -> String,
{
    fn format(&self, formats: &RenderFormats) -> String {
        self(formats)
    }
}

/// `>> {spinner} | {total} ({speed}/s)`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl Formatter for DefaultFormatter {
    fn format(&self, f: &RenderFormats) -> String {
        format!(">> {} | {} ({}/s)", f.spinner, f.total_size, f.speed_per_second)
    }
}

/// `{spinner} | {label}: {total} ({speed}/s)`
#[derive(Debug, Clone, Default)]
pub struct PrefixFormatter {
    pub label: String,
}

impl PrefixFormatter {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

impl Formatter for PrefixFormatter {
    fn format(&self, f: &RenderFormats) -> String {
        format!(
            "{} | {}: {} ({}/s)",
            f.spinner, self.label, f.total_size, f.speed_per_second
        )
    }
}
