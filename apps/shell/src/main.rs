mod cli;
mod rehearsal;

use crate::cli::Cli;
use anyhow::Context;
use clap::Parser;
use splash_logger::{LevelFilter, Logger};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let logger = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).level(level);
    let logger = match cli.log_dir.as_deref() {
        Some(dir) if cli.log_json => logger.path(dir).json().init()?,
        Some(dir) => logger.path(dir).init()?,
        None => logger.init()?,
    };
    if logger.writes_file() {
        tracing::debug!(json = cli.log_json, "Writing rolling log files");
    }

    let config = cli.transition_config().context("Critical: Configuration is malformed")?;
    let report = rehearsal::run(&cli, config).await?;

    if cli.strict && !report.is_complete() {
        anyhow::bail!("Transition finished with skipped mutations: {:?}", report.skipped);
    }

    Ok(())
}
