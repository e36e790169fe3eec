//! CLI entry point for batch kolam generation

use clap::Parser;
use kolam::io::cli::{BatchProcessor, Cli};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> kolam::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(cli.log_level().into()))
        .init();

    let mut processor = BatchProcessor::new(cli);
    processor.process()?;
    Ok(())
}
