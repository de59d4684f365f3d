//! Progress rendering: a display throttle decides *when* to draw, a
//! [`Formatter`] decides *what* the line says, and an [`OutputSink`] decides
//! *where* it goes. Measurement code only calls [`ProgressRenderer::on_chunk`].

mod format;
mod sink;
mod throttle;

pub use format::{
    DefaultFormatter, Formatter, PrefixFormatter, ProgressSnapshot, RenderFormats,
    DISPLAY_DECIMALS,
};
pub use sink::{OutputSink, TerminalSink, LINE_PADDING};
pub use throttle::{DisplayThrottle, SPINNER_FRAMES};

use std::io;
use std::time::{Duration, Instant};

/// Throttled progress line renderer.
pub struct ProgressRenderer<F, S> {
    throttle: DisplayThrottle,
    formatter: F,
    sink: S,
}

impl<F: Formatter, S: OutputSink> ProgressRenderer<F, S> {
    pub fn new(display_interval: Duration, formatter: F, sink: S) -> Self {
        Self {
            throttle: DisplayThrottle::new(display_interval),
            formatter,
            sink,
        }
    }

    /// Called after each chunk. Draws a line if the throttle allows it and
    /// returns whether one was drawn.
    pub fn on_chunk(&mut self, at: Instant, total_bytes: u64, bytes_per_sec: u64) -> io::Result<bool> {
        let Some(spinner) = self.throttle.poll(at) else {
            return Ok(false);
        };
        let snapshot = ProgressSnapshot {
            spinner,
            total_bytes,
            bytes_per_sec,
        };
        let line = self.formatter.format(&snapshot.formats());
        self.sink.emit(&line)?;
        Ok(true)
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_only_when_throttle_allows() {
        let t0 = Instant::now();
        let mut lines: Vec<String> = Vec::new();
        {
            let sink = |l: &str| -> io::Result<()> {
                lines.push(l.to_string());
                Ok(())
            };
            let mut r = ProgressRenderer::new(Duration::from_millis(100), DefaultFormatter, sink);
            assert!(r.on_chunk(t0, 2048, 0).unwrap());
            assert!(!r.on_chunk(t0 + Duration::from_millis(20), 4096, 0).unwrap());
            assert!(r.on_chunk(t0 + Duration::from_millis(100), 8192, 1025).unwrap());
        }
        assert_eq!(lines, vec![">> / | 2.0kb (0.0b/s)", ">> - | 8.0kb (1.0kb/s)"]);
    }

    #[test]
    fn terminal_sink_receives_prefixed_lines() {
        let t0 = Instant::now();
        let mut r = ProgressRenderer::new(
            Duration::from_millis(1),
            PrefixFormatter::new("iso"),
            TerminalSink::new(Vec::new()),
        );
        r.on_chunk(t0, 10, 5).unwrap();
        r.sink_mut().finish().unwrap();
        let out = String::from_utf8(r.into_sink().into_inner()).unwrap();
        assert!(out.starts_with("\r/ | iso: 10.0b (5.0b/s)"));
        assert!(out.ends_with('\n'));
    }
}
