//! Logging Settings
//!
//! Logging configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `MARKET_DATA_LOG`: filter directive (falls back to `RUST_LOG`,
//!   default: `market_data_updates=info`)
//! - `MARKET_DATA_LOG_TARGET`: include event targets (default: true)
//! - `MARKET_DATA_LOG_ANSI`: colorize output (default: true)

use tracing_subscriber::EnvFilter;

/// Default filter directive.
const DEFAULT_FILTER: &str = "market_data_updates=info";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// `EnvFilter` directive string.
    pub filter: String,
    /// Include event targets in output.
    pub with_target: bool,
    /// Colorize output.
    pub ansi: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            with_target: true,
            ansi: true,
        }
    }
}

impl LoggingSettings {
    /// Create settings from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter directive does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create settings from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter directive does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let filter = non_blank("MARKET_DATA_LOG")
            .or_else(|| non_blank("RUST_LOG"))
            .unwrap_or(defaults.filter);

        if let Err(e) = EnvFilter::try_new(&filter) {
            return Err(ConfigError::InvalidFilter {
                filter,
                reason: e.to_string(),
            });
        }

        let with_target = parse_bool(lookup("MARKET_DATA_LOG_TARGET"), defaults.with_target);
        let ansi = parse_bool(lookup("MARKET_DATA_LOG_ANSI"), defaults.ansi);

        Ok(Self {
            filter,
            with_target,
            ansi,
        })
    }

    /// Build the `EnvFilter` for these settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter directive does not parse.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.filter).map_err(|e| ConfigError::InvalidFilter {
            filter: self.filter.clone(),
            reason: e.to_string(),
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Filter directive could not be parsed.
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// The rejected directive.
        filter: String,
        /// Parser message.
        reason: String,
    },
}

fn parse_bool(value: Option<String>, default: bool) -> bool {
    match value.as_deref().map(str::to_lowercase).as_deref() {
        Some("true" | "1" | "yes") => true,
        Some("false" | "0" | "no") => false,
        _ => default,
    }
}
