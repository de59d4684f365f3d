//! Sequential multi-URL transfer.
//!
//! Each URL is opened through a [`Transport`], streamed chunk by chunk into
//! `<output>.<seq>` while feeding the throughput estimator and the progress
//! renderer, and finally all part files are concatenated into `<output>`.
//! URLs that fail to open are skipped; nothing is retried.

mod report;
mod target;

pub use report::{PartSummary, SkippedUrl, TransferReport};
pub use target::{TransferSettings, TransferTarget};

use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::render::{Formatter, OutputSink, ProgressRenderer};
use crate::storage::{self, PartWriter};
use crate::throughput::ThroughputEstimator;
use crate::transport::Transport;

/// Downloads every URL of `target` in order and assembles the output.
///
/// Returns `Ok(false)` without touching the filesystem when `target` has no
/// URLs, `Ok(true)` otherwise, even if every URL was skipped (the output is
/// then empty). Use [`download_with_report`] to tell those cases apart.
pub fn download<T, F, S>(
    target: &TransferTarget,
    settings: &TransferSettings,
    transport: &T,
    renderer: &mut ProgressRenderer<F, S>,
) -> Result<bool>
where
    T: Transport + ?Sized,
    F: Formatter,
    S: OutputSink,
{
    Ok(download_with_report(target, settings, transport, renderer)?.is_success())
}

/// Like [`download`] but returns per-URL details.
pub fn download_with_report<T, F, S>(
    target: &TransferTarget,
    settings: &TransferSettings,
    transport: &T,
    renderer: &mut ProgressRenderer<F, S>,
) -> Result<TransferReport>
where
    T: Transport + ?Sized,
    F: Formatter,
    S: OutputSink,
{
    let mut report = TransferReport::default();
    if target.urls.is_empty() {
        tracing::warn!("no URLs given, nothing to download");
        return Ok(report);
    }

    let mut total_bytes = 0u64;
    for (index, url) in target.urls.iter().enumerate() {
        let sequence = u32::try_from(index + 1).context("too many URLs")?;
        report.attempted += 1;

        let stream = match transport.open(url) {
            Ok(stream) => stream,
            Err(e) => {
                tracing::warn!(sequence, url = %url, error = %e, "could not open URL, skipping");
                report.skipped.push(SkippedUrl {
                    sequence,
                    url: url.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let path = storage::part_path(&target.output, sequence);
        tracing::debug!(sequence, url = %url, part = %path.display(), "transfer started");
        let bytes = stream_to_part(stream, &path, settings, &mut total_bytes, renderer)
            .with_context(|| format!("transfer of {} failed", url))?;
        tracing::info!(sequence, url = %url, bytes, "transfer finished");

        report.parts.push(PartSummary {
            sequence,
            url: url.clone(),
            path,
            bytes,
        });
    }

    let parts: Vec<PathBuf> = report.parts.iter().map(|p| p.path.clone()).collect();
    report.total_bytes = storage::concatenate(&parts, &target.output)?;
    tracing::info!(
        output = %target.output.display(),
        parts = report.parts.len(),
        skipped = report.skipped.len(),
        bytes = report.total_bytes,
        "output assembled"
    );
    Ok(report)
}

/// Streams one opened URL into its part file. `total_bytes` is the running
/// total across all URLs of the run.
fn stream_to_part<F, S>(
    mut stream: Box<dyn Read + Send>,
    path: &Path,
    settings: &TransferSettings,
    total_bytes: &mut u64,
    renderer: &mut ProgressRenderer<F, S>,
) -> Result<u64>
where
    F: Formatter,
    S: OutputSink,
{
    let mut writer = PartWriter::create(path)?;
    let mut estimator = ThroughputEstimator::default();
    let mut buf = vec![0u8; settings.chunk_size.max(1)];

    loop {
        if !settings.intentional_delay.is_zero() {
            std::thread::sleep(settings.intentional_delay);
        }
        let n = read_chunk(&mut stream, &mut buf).context("stream read failed")?;
        if n == 0 {
            break;
        }
        writer.write_chunk(&buf[..n])?;

        let now = Instant::now();
        *total_bytes += n as u64;
        estimator.record(n as u64, now);
        renderer
            .on_chunk(now, *total_bytes, estimator.bytes_per_sec())
            .context("progress output failed")?;
    }

    writer.finish()
}

/// Fills `buf` from the stream, retrying on `Interrupted`. Returns fewer than
/// `buf.len()` bytes only at end of stream; zero means the stream is exhausted.
fn read_chunk(stream: &mut dyn Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match stream.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
