//! Sequential buffered writer for one part file.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Receives the chunks of a single transfer. Writes are buffered; call
/// [`PartWriter::finish`] to flush.
pub struct PartWriter {
    out: BufWriter<File>,
    path: PathBuf,
    written: u64,
}

impl PartWriter {
    /// Create (or truncate) the part file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to create part file: {}", path.display()))?;
        Ok(PartWriter {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
            written: 0,
        })
    }

    pub fn write_chunk(&mut self, data: &[u8]) -> Result<()> {
        self.out
            .write_all(data)
            .with_context(|| format!("write to {} failed", self.path.display()))?;
        self.written += data.len() as u64;
        Ok(())
    }

    /// Flush and close. Returns the number of bytes written.
    pub fn finish(mut self) -> Result<u64> {
        self.out
            .flush()
            .with_context(|| format!("flush of {} failed", self.path.display()))?;
        Ok(self.written)
    }
}
