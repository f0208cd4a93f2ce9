//! Engine configuration.
//!
//! Values come from the process environment (after `.env` loading in the
//! binary) or from [`EngineConfigBuilder`] in tests.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `DEXDLE_CATALOG_PATH` | JSON catalog snapshot to load | built-in starter catalog |
//! | `DEXDLE_RANDOM_SEED` | `u64` seed for target selection | OS entropy |
//! | `LOG_FORMAT` | `pretty` or `json` | `pretty` |

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const CATALOG_PATH_VARIABLE: &str = "DEXDLE_CATALOG_PATH";
const RANDOM_SEED_VARIABLE: &str = "DEXDLE_RANDOM_SEED";
const LOG_FORMAT_VARIABLE: &str = "LOG_FORMAT";

// =============================================================================
// ConfigurationError
// =============================================================================

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("invalid log format: {0} (expected 'pretty' or 'json')")]
    InvalidLogFormat(String),

    #[error("invalid random seed: {0} (expected an unsigned 64-bit integer)")]
    InvalidRandomSeed(String),

    #[error("environment variable {0} is not valid UTF-8")]
    NotUnicode(&'static str),

    #[error("catalog path must not be empty")]
    EmptyCatalogPath,
}

// =============================================================================
// LogFormat
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigurationError::InvalidLogFormat(value.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(formatter, "pretty"),
            Self::Json => write!(formatter, "json"),
        }
    }
}

// =============================================================================
// EngineConfig
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Snapshot to load; `None` selects the built-in starter catalog.
    pub catalog_path: Option<PathBuf>,
    /// Fixed seed for reproducible target selection.
    pub random_seed: Option<u64>,
    pub log_format: LogFormat,
}

impl EngineConfig {
    #[must_use]
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Loads configuration from the process environment.
    ///
    /// Empty or whitespace-only values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if a variable holds an unparseable value.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_source(|name| env::var(name))
    }

    /// Loads configuration through `lookup`, which behaves like [`env::var`].
    ///
    /// # Errors
    ///
    /// Same as [`EngineConfig::from_env`].
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let read = |name: &'static str| match lookup(name) {
            Ok(value) => {
                let value = value.trim().to_string();
                Ok((!value.is_empty()).then_some(value))
            }
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigurationError::NotUnicode(name)),
        };

        let catalog_path = read(CATALOG_PATH_VARIABLE)?.map(PathBuf::from);
        let random_seed = read(RANDOM_SEED_VARIABLE)?
            .map(|value| parse_seed(&value))
            .transpose()?;
        let log_format = read(LOG_FORMAT_VARIABLE)?
            .map(|value| value.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        let config = Self {
            catalog_path,
            random_seed,
            log_format,
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyCatalogPath`] for an empty path.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self
            .catalog_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(ConfigurationError::EmptyCatalogPath);
        }
        Ok(())
    }

    /// Starts a builder pre-filled with this configuration, for layering
    /// command-line overrides on top of the environment.
    #[must_use]
    pub fn into_builder(self) -> EngineConfigBuilder {
        EngineConfigBuilder {
            catalog_path: self.catalog_path,
            random_seed: self.random_seed,
            log_format: self.log_format,
        }
    }
}

/// Parses a `DEXDLE_RANDOM_SEED` value.
///
/// # Errors
///
/// Returns [`ConfigurationError::InvalidRandomSeed`] unless the value is a `u64`.
pub fn parse_seed(value: &str) -> Result<u64, ConfigurationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigurationError::InvalidRandomSeed(value.to_string()))
}

// =============================================================================
// EngineConfigBuilder
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    catalog_path: Option<PathBuf>,
    random_seed: Option<u64>,
    log_format: LogFormat,
}

impl EngineConfigBuilder {
    #[must_use]
    pub fn catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    #[must_use]
    pub const fn random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if validation fails.
    pub fn build(self) -> Result<EngineConfig, ConfigurationError> {
        let config = EngineConfig {
            catalog_path: self.catalog_path,
            random_seed: self.random_seed,
            log_format: self.log_format,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;
    use std::ffi::OsString;

    fn source<'a>(
        values: &'a [(&'a str, &'a str)],
    ) -> impl Fn(&str) -> Result<String, env::VarError> + 'a {
        let values: HashMap<&str, &str> = values.iter().copied().collect();
        move |name| {
            values
                .get(name)
                .map(|value| (*value).to_string())
                .ok_or(env::VarError::NotPresent)
        }
    }

    #[rstest]
    fn defaults_when_nothing_is_set() {
        let config = EngineConfig::from_source(source(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[rstest]
    fn reads_every_variable() {
        let config = EngineConfig::from_source(source(&[
            ("DEXDLE_CATALOG_PATH", "data/catalog.json"),
            ("DEXDLE_RANDOM_SEED", " 42 "),
            ("LOG_FORMAT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.catalog_path, Some(PathBuf::from("data/catalog.json")));
        assert_eq!(config.random_seed, Some(42));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[rstest]
    fn blank_values_count_as_unset() {
        let config = EngineConfig::from_source(source(&[
            ("DEXDLE_CATALOG_PATH", "   "),
            ("DEXDLE_RANDOM_SEED", ""),
        ]))
        .unwrap();

        assert_eq!(config.catalog_path, None);
        assert_eq!(config.random_seed, None);
    }

    #[rstest]
    #[case("DEXDLE_RANDOM_SEED", "-1", ConfigurationError::InvalidRandomSeed("-1".into()))]
    #[case("DEXDLE_RANDOM_SEED", "abc", ConfigurationError::InvalidRandomSeed("abc".into()))]
    #[case("LOG_FORMAT", "xml", ConfigurationError::InvalidLogFormat("xml".into()))]
    fn invalid_values_are_rejected(
        #[case] name: &str,
        #[case] value: &str,
        #[case] expected: ConfigurationError,
    ) {
        let error = EngineConfig::from_source(source(&[(name, value)])).unwrap_err();
        assert_eq!(error, expected);
    }

    #[rstest]
    fn non_unicode_value_names_the_variable() {
        let error = EngineConfig::from_source(|name| {
            if name == "LOG_FORMAT" {
                Err(env::VarError::NotUnicode(OsString::from("?")))
            } else {
                Err(env::VarError::NotPresent)
            }
        })
        .unwrap_err();

        assert_eq!(error, ConfigurationError::NotUnicode("LOG_FORMAT"));
    }

    #[rstest]
    fn builder_overrides_environment_values() {
        let config = EngineConfig::from_source(source(&[("DEXDLE_RANDOM_SEED", "1")]))
            .unwrap()
            .into_builder()
            .random_seed(7)
            .catalog_path("snapshot.json")
            .build()
            .unwrap();

        assert_eq!(config.random_seed, Some(7));
        assert_eq!(config.catalog_path, Some(PathBuf::from("snapshot.json")));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[rstest]
    fn builder_rejects_empty_catalog_path() {
        let error = EngineConfig::builder().catalog_path("").build().unwrap_err();
        assert_eq!(error, ConfigurationError::EmptyCatalogPath);
    }

    #[rstest]
    #[case("pretty", LogFormat::Pretty)]
    #[case("Text", LogFormat::Pretty)]
    #[case(" json ", LogFormat::Json)]
    fn log_format_parses(#[case] input: &str, #[case] expected: LogFormat) {
        assert_eq!(input.parse::<LogFormat>().unwrap(), expected);
    }
}
