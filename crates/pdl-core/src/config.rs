use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::transfer::TransferSettings;
use crate::transport::CurlTransport;

/// Transport parameters (optional `[transport]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    pub connect_timeout_secs: u64,
    /// Abort when throughput stays below this many bytes/sec for `low_speed_time_secs`.
    pub low_speed_limit: u32,
    pub low_speed_time_secs: u64,
    pub max_redirections: u32,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            low_speed_limit: 1024,
            low_speed_time_secs: 60,
            max_redirections: 10,
        }
    }
}

impl TransportConfig {
    pub fn curl_transport(&self) -> CurlTransport {
        CurlTransport {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            low_speed_limit: self.low_speed_limit,
            low_speed_time: Duration::from_secs(self.low_speed_time_secs),
            max_redirections: self.max_redirections,
            ..CurlTransport::default()
        }
    }
}

/// Global configuration loaded from `~/.config/pdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdlConfig {
    /// Bytes requested per read.
    pub chunk_size: usize,
    /// Artificial sleep before each read, in seconds (0 = off).
    pub intentional_delay_secs: f64,
    /// Minimum seconds between progress redraws.
    pub display_interval_secs: f64,
    /// Optional label shown in the progress line.
    #[serde(default)]
    pub label: Option<String>,
    /// Optional transport tuning; if missing, built-in defaults are used.
    #[serde(default)]
    pub transport: Option<TransportConfig>,
}

impl Default for PdlConfig {
    fn default() -> Self {
        let settings = TransferSettings::default();
        Self {
            chunk_size: settings.chunk_size,
            intentional_delay_secs: settings.intentional_delay.as_secs_f64(),
            display_interval_secs: settings.display_interval.as_secs_f64(),
            label: None,
            transport: None,
        }
    }
}

impl PdlConfig {
    /// Transfer settings with out-of-range values clamped: chunk size at least 1,
    /// negative or non-finite durations treated as zero, display interval at least 1 ms.
    pub fn settings(&self) -> TransferSettings {
        TransferSettings {
            chunk_size: self.chunk_size.max(1),
            intentional_delay: secs_to_duration(self.intentional_delay_secs),
            display_interval: secs_to_duration(self.display_interval_secs)
                .max(Duration::from_millis(1)),
        }
    }

    pub fn curl_transport(&self) -> CurlTransport {
        self.transport.clone().unwrap_or_default().curl_transport()
    }
}

fn secs_to_duration(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PdlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
