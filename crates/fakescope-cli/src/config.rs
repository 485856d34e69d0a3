//! Registry configuration for the command line

use crate::cli::Cli;
use fakescope_classifiers::RegistryConfig;
use std::path::Path;
use tracing::debug;

/// Load configuration from file and CLI overrides.
///
/// A missing config file falls back to the built-in defaults
/// (`./models` with the standard artifact names).
pub fn load(config_path: &Path, cli: &Cli) -> anyhow::Result<RegistryConfig> {
    let mut config = if config_path.exists() {
        debug!("Reading configuration from {}", config_path.display());
        RegistryConfig::from_file(config_path)?
    } else {
        debug!(
            "No configuration at {}, using defaults",
            config_path.display()
        );
        RegistryConfig::default()
    };

    // Apply CLI overrides
    if let Some(dir) = &cli.models_dir {
        config = config.with_models_dir(dir);
    }

    if let Some(stopwords) = &cli.stopwords {
        config = config.with_stopwords(stopwords);
    }

    Ok(config)
}
