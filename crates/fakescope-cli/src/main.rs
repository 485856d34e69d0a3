use clap::Parser;
use fakescope_cli::cli::{Cli, Commands};
use fakescope_cli::{commands, config};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_json);

    let config = config::load(&cli.config, &cli)?;
    debug!(models_dir = %config.models_dir.display(), "Configuration loaded");

    match cli.command {
        Commands::Analyze {
            text,
            dataset,
            format,
        } => {
            let raw = commands::read_input(text)?;
            commands::analyze(&config, &raw, dataset, format)
        }

        Commands::Models { format } => commands::models(&config, format),

        Commands::Normalize { text } => {
            let raw = commands::read_input(text)?;
            commands::normalize(&config, &raw)
        }
    }
}

/// Logs go to stderr so stdout carries only the report
fn init_logging(verbose: bool, json: bool) {
    let filter = if verbose {
        EnvFilter::new("fakescope=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fakescope=info"))
    };

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
