// ARCHSCAN - Architecture keyword report for the first PDF in the working directory
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use archscan::config;

/// Scan the first PDF in the current directory and write pdf_analysis_result.json
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {}

fn init_logging() {
    let filter = EnvFilter::try_new(config::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let _args = Args::parse();
    init_logging();

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    archscan::run_in(&cwd)?;
    Ok(())
}
