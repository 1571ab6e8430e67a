//! Infrastructure Layer - Ambient concerns around the domain types.

/// Environment-driven settings.
pub mod config;

/// `tracing` subscriber installation.
pub mod telemetry;
