//! CLI for pdl.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use pdl_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_get, GetArgs};

/// Top-level CLI for pdl.
#[derive(Debug, Parser)]
#[command(name = "pdl")]
#[command(about = "pdl: download URLs in sequence into one file, with live progress", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download one or more URLs, in order, concatenated into OUTPUT.
    Get {
        /// Source URLs (http, https or file). Ones that fail to open are skipped.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Output file.
        #[arg(short, long, value_name = "OUTPUT")]
        output: PathBuf,

        /// Bytes per read (overrides config).
        #[arg(long, value_name = "BYTES")]
        chunk_size: Option<usize>,

        /// Sleep before each read, in milliseconds (overrides config).
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,

        /// Minimum milliseconds between progress redraws (overrides config).
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,

        /// Label shown in the progress line instead of the `>>` marker.
        #[arg(long)]
        label: Option<String>,
    },

    /// Print a shell completion script to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    /// Returns `Ok(false)` when the command had nothing to do.
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Get {
                urls,
                output,
                chunk_size,
                delay_ms,
                interval_ms,
                label,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let args = GetArgs {
                    urls,
                    output,
                    chunk_size,
                    delay_ms,
                    interval_ms,
                    label,
                };
                run_get(&cfg, args)
            }
            CliCommand::Completions { shell } => {
                run_completions(shell);
                Ok(true)
            }
        }
    }
}
