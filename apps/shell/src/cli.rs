//! # CLI Argument Definitions

use clap::Parser;
use splash_kernel::config::{ConfigError, load_transition_config};
use splash_kernel::domain::TransitionConfig;
use std::path::PathBuf;

/// Rehearses the welcome-to-login transition against an in-memory page.
#[derive(Debug, Parser)]
#[command(name = "splash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rehearse the welcome-to-login page transition without a browser")]
pub(crate) struct Cli {
    /// Configuration file (TOML, JSON or YAML). Defaults to `splash.*` when present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Milliseconds the welcome slide stays untouched
    #[arg(long)]
    pub hold_ms: Option<u64>,

    /// Milliseconds given to the fade before the login panel shows
    #[arg(long)]
    pub fade_ms: Option<u64>,

    /// Leave the welcome region out of the page
    #[arg(long)]
    pub omit_welcome: bool,

    /// Leave the login region out of the page
    #[arg(long)]
    pub omit_login: bool,

    /// Exit with an error when any mutation was skipped
    #[arg(long)]
    pub strict: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write logs to daily rolling files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Write the log files as JSON lines
    #[arg(long, requires = "log_dir")]
    pub log_json: bool,
}

impl Cli {
    /// Layers flag overrides on top of the file and environment configuration.
    pub fn transition_config(&self) -> Result<TransitionConfig, ConfigError> {
        let mut config = load_transition_config(self.config.as_deref())?;
        if let Some(hold_ms) = self.hold_ms {
            config.hold_ms = hold_ms;
        }
        if let Some(fade_ms) = self.fade_ms {
            config.fade_ms = fade_ms;
        }
        Ok(config)
    }
}
