use anyhow::Result;
use clap::Parser;

use amm::app::{self, Settings};
use amm::cli::Cli;
use amm::config::loader;
use amm::environment::SystemEnvironment;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up tracing.
    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    // Load config.
    let config = loader::load_config(cli.config.as_deref())?;

    let environment = SystemEnvironment::from_env();
    let settings = Settings::resolve(&cli, &config, &environment)?;
    tracing::info!(output = %settings.output_file.display(), "amm starting");

    let stats = app::run(&settings, &environment)?;
    print!("{}", stats.details(settings.summary));

    Ok(())
}
