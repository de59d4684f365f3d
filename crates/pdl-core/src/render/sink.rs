//! Output sinks for rendered progress lines.

use std::io::{self, Write};

/// Trailing blanks written after each line to erase longer previous text.
pub const LINE_PADDING: usize = 11;

/// Presents a formatted progress line.
pub trait OutputSink {
    fn emit(&mut self, line: &str) -> io::Result<()>;
}

impl<F> OutputSink for F
where
    F: FnMut(&str) -> io::Result<()>,
{
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self(line)
    }
}

/// Overwrites the current terminal line: `\r{line}` followed by padding.
pub struct TerminalSink<W: Write> {
    out: W,
    emitted: bool,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, emitted: false }
    }

    /// Ends the progress line with a newline if anything was drawn.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.emitted {
            self.out.write_all(b"\n")?;
            self.out.flush()?;
            self.emitted = false;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for TerminalSink<W> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        write!(self.out, "\r{}{:pad$}", line, "", pad = LINE_PADDING)?;
        self.out.flush()?;
        self.emitted = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_sink_overwrites_line() {
        let mut sink = TerminalSink::new(Vec::new());
        sink.emit("abc").unwrap();
        sink.emit("de").unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        let pad = " ".repeat(LINE_PADDING);
        assert_eq!(out, format!("\rabc{pad}\rde{pad}"));
    }

    #[test]
    fn finish_only_after_output() {
        let mut sink = TerminalSink::new(Vec::new());
        sink.finish().unwrap();
        sink.emit("x").unwrap();
        sink.finish().unwrap();
        sink.finish().unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(out.ends_with(" \n"));
        assert_eq!(out.matches('\n').count(), 1);
    }

    #[test]
    fn closure_sink_collects_lines() {
        let mut lines = Vec::new();
        {
            let mut sink = |l: &str| -> io::Result<()> {
                lines.push(l.to_string());
                Ok(())
            };
            sink.emit("one").unwrap();
            sink.emit("two").unwrap();
        }
        assert_eq!(lines, vec!["one", "two"]);
    }
}
