//! Part files and final assembly.
//!
//! Each transfer is written to `<output>.<seq>`; once every URL has been
//! attempted the parts are appended to `<output>` in sequence order and removed.

mod writer;

pub use writer::PartWriter;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Path for part `seq`: appends `.<seq>` to the output path (`file.iso` → `file.iso.3`).
pub fn part_path(output: &Path, seq: u32) -> PathBuf {
    let mut o = output.as_os_str().to_owned();
    o.push(format!(".{}", seq));
    PathBuf::from(o)
}

/// Creates `output` (truncating) and appends each part in order, deleting
/// every part after it has been copied. Returns the total bytes written.
pub fn concatenate(parts: &[PathBuf], output: &Path) -> Result<u64> {
    let file = File::create(output)
        .with_context(|| format!("failed to create output: {}", output.display()))?;
    let mut out = BufWriter::new(file);
    let mut total = 0u64;
    for part in parts {
        let mut src =
            File::open(part).with_context(|| format!("failed to open part: {}", part.display()))?;
        let n = io::copy(&mut src, &mut out)
            .with_context(|| format!("failed to append {} to {}", part.display(), output.display()))?;
        drop(src);
        std::fs::remove_file(part)
            .with_context(|| format!("failed to remove part: {}", part.display()))?;
        tracing::debug!(part = %part.display(), bytes = n, "part appended");
        total += n;
    }
    out.flush().context("output flush failed")?;
    Ok(total)
}
