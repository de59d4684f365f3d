//! `pdl get` – download URLs in sequence into one output file.

use anyhow::Result;
use pdl_core::config::PdlConfig;
use pdl_core::render::{DefaultFormatter, Formatter, PrefixFormatter, ProgressRenderer, TerminalSink};
use pdl_core::transfer::{self, TransferSettings, TransferTarget};
use pdl_core::units::best_fit_unit;
use std::path::PathBuf;
use std::time::Duration;

/// Arguments of `pdl get`; `None` means "use the config value".
#[derive(Debug, Clone, Default)]
pub struct GetArgs {
    pub urls: Vec<String>,
    pub output: PathBuf,
    pub chunk_size: Option<usize>,
    pub delay_ms: Option<u64>,
    pub interval_ms: Option<u64>,
    pub label: Option<String>,
}

impl GetArgs {
    /// Config settings with command-line overrides applied.
    pub fn settings(&self, cfg: &PdlConfig) -> TransferSettings {
        let mut settings = cfg.settings();
        if let Some(size) = self.chunk_size {
            settings.chunk_size = size.max(1);
        }
        if let Some(ms) = self.delay_ms {
            settings.intentional_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = self.interval_ms {
            settings.display_interval = Duration::from_millis(ms.max(1));
        }
        settings
    }
}

/// Returns `Ok(false)` if there was nothing to download.
pub fn run_get(cfg: &PdlConfig, args: GetArgs) -> Result<bool> {
    let settings = args.settings(cfg);
    let label = args.label.clone().or_else(|| cfg.label.clone());
    let target = TransferTarget::new(args.urls, args.output);
    tracing::info!(
        urls = target.urls.len(),
        output = %target.output.display(),
        chunk_size = settings.chunk_size,
        "get started"
    );

    match label {
        Some(label) => fetch(cfg, &target, &settings, PrefixFormatter::new(label)),
        None => fetch(cfg, &target, &settings, DefaultFormatter),
    }
}

fn fetch<F: Formatter>(
    cfg: &PdlConfig,
    target: &TransferTarget,
    settings: &TransferSettings,
    formatter: F,
) -> Result<bool> {
    let transport = cfg.curl_transport();
    let mut renderer =
        ProgressRenderer::new(settings.display_interval, formatter, TerminalSink::stdout());
    let result = transfer::download_with_report(target, settings, &transport, &mut renderer);
    renderer.sink_mut().finish()?;
    let report = result?;

    if !report.is_success() {
        eprintln!("No URLs to download.");
        return Ok(false);
    }
    for skipped in &report.skipped {
        eprintln!("skipped #{} {}: {}", skipped.sequence, skipped.url, skipped.reason);
    }
    if report.all_skipped() {
        tracing::warn!(output = %target.output.display(), "every URL was skipped, output is empty");
    }
    eprintln!(
        "{} of {} URL(s) -> {} ({})",
        report.completed_count(),
        report.attempted,
        target.output.display(),
        best_fit_unit(report.total_bytes, 0).to_human_string(2)
    );
    Ok(true)
}
