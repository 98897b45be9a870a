use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lingo_registry::cli::Cli;
use lingo_registry::{i18n, ops};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LINGO_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = i18n::init(&cli)?;

    let all_ok = ops::run(&cli, &registry, &mut std::io::stdout().lock())?;

    if !all_ok {
        std::process::exit(1);
    }

    Ok(())
}
