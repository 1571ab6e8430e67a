//! Tracing Subscriber Setup
//!
//! Installs a `tracing-subscriber` fmt layer filtered by [`LoggingSettings`].
//! Library code only emits events; a consuming service calls [`init`] once
//! at startup.
//!
//! # Usage
//!
//! ```ignore
//! use market_data_updates::{LoggingSettings, init_telemetry};
//!
//! init_telemetry(&LoggingSettings::from_env()?)?;
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::infrastructure::config::{ConfigError, LoggingSettings};

/// Failure to install the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Settings could not be turned into a filter.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A global subscriber is already installed.
    #[error("global tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init(settings: &LoggingSettings) -> Result<(), TelemetryError> {
    let env_filter = settings.env_filter()?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(settings.with_target)
        .with_ansi(settings.ansi)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;

    tracing::debug!(filter = %settings.filter, "Tracing subscriber installed");
    Ok(())
}
