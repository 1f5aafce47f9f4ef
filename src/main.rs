//! Reposcout - find Java sources and git repositories, count commit history
//!
//! A fast, local-first discovery tool: find Java source files by name,
//! locate git-backed projects, and report per-file commit counts.

use anyhow::Result;
use clap::Parser;
use reposcout::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = cli::Cli::parse();
    cli::run(cli)
}
