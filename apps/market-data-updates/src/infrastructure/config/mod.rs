//! Configuration Module
//!
//! Settings loaded from environment variables.

mod settings;

pub use settings::{ConfigError, LoggingSettings};
