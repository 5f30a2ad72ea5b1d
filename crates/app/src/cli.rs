//! CLI argument parsing using clap derive API
//!
//! Purely declarative; no side effects or I/O.

use std::path::PathBuf;

use apismoke_infrastructure::SettingsOverrides;
use clap::{Parser, ValueEnum};

/// Run a fixed HTTP smoke-test checklist against a REST API.
///
/// Settings come from defaults, `apismoke.toml`, `APISMOKE_*` environment
/// variables and these flags, in increasing precedence.
#[derive(Parser, Debug)]
#[command(name = "apismoke", version, about, long_about = None)]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./apismoke.toml when present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL every endpoint is appended to.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Bearer token for authenticated cases.
    #[arg(long)]
    pub token: Option<String>,

    /// Per-request timeout in milliseconds.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Suite file (.yaml, .yml or .json) to run instead of the built-in one.
    #[arg(short, long)]
    pub suite: Option<PathBuf>,

    /// Output format.
    #[arg(long, default_value = "text")]
    pub output: OutputFormat,

    /// Disable ANSI colors.
    #[arg(long)]
    pub no_color: bool,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the suite without sending any request (text only).
    #[arg(long, conflicts_with = "output")]
    pub list: bool,
}

impl Cli {
    /// Settings given on the command line.
    #[must_use]
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            base_url: self.base_url.clone(),
            token: self.token.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored line-per-case report.
    Text,
    /// One JSON document after the run.
    Json,
}
