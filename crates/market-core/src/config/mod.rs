//! Application configuration schemas.
//!
//! Configuration is read from an optional TOML file via the `config`
//! crate and then overridden by `MARKET__SECTION__KEY` environment
//! variables. Every section has defaults, so a missing file still yields
//! a usable configuration.

pub mod listing;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::listing::ListingConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// List view defaults.
    #[serde(default)]
    pub listing: ListingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file (extension optional) and the
    /// environment.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("MARKET")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let parsed: Self = config.try_deserialize()?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Validate cross-field constraints.
    pub fn validate(&self) -> Result<(), AppError> {
        self.listing.validate()?;
        match self.logging.format.as_str() {
            "json" | "pretty" => Ok(()),
            other => Err(AppError::configuration(format!(
                "Unknown logging.format '{other}'. Expected 'json' or 'pretty'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = AppConfig::load("does/not/exist/market").expect("defaults");
        assert_eq!(config.listing.default_page_size, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_malformed_file_keeps_cause() {
        let path = std::env::temp_dir().join(format!("market-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[listing]\ndefault_page_size = \"ten\"\n").unwrap();

        let err = AppConfig::load(path.to_str().unwrap()).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(err.is(crate::error::ErrorKind::Configuration));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let mut config = AppConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }
}
