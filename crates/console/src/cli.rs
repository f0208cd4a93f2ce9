use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use dexdle_infrastructure::config::{ConfigurationError, EngineConfig, LogFormat};

/// Guess the hidden creature from per-attribute hints.
#[derive(Debug, Clone, Parser)]
#[command(name = "dexdle", version, about)]
pub struct Args {
    /// Player identifier. A fresh one is generated when omitted.
    #[arg(long, env = "DEXDLE_PLAYER")]
    pub player: Option<String>,

    /// JSON catalog snapshot to play with. Overrides DEXDLE_CATALOG_PATH.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Seed for target selection. Overrides DEXDLE_RANDOM_SEED.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log format, `pretty` or `json`. Overrides LOG_FORMAT.
    #[arg(long, value_parser = LogFormat::from_str)]
    pub log_format: Option<LogFormat>,

    /// Print every response as one JSON object per line.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Layers the flags that were given on top of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the merged configuration is invalid.
    pub fn apply(&self, config: EngineConfig) -> Result<EngineConfig, ConfigurationError> {
        let mut builder = config.into_builder();
        if let Some(path) = &self.catalog {
            builder = builder.catalog_path(path);
        }
        if let Some(seed) = self.seed {
            builder = builder.random_seed(seed);
        }
        if let Some(format) = self.log_format {
            builder = builder.log_format(format);
        }
        builder.build()
    }
}
