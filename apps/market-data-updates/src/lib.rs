#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::needless_pass_by_value
    )
)]

//! Market Data Updates - Streaming Value Objects
//!
//! The records a market data stream hands to its consumers. Each update is
//! tagged with a data coordinate naming the dataset, measure and dimensions
//! it describes.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Update records and the types they carry
//!   - `coordinate`: Data coordinate descriptor and frequency
//!   - `series`: Time-keyed ordered series container
//!   - `value`: Point value (absent, text, or numeric)
//!   - `updates`: `SeriesUpdate`, `PointUpdate`, `DataUpdate`
//!
//! - **Infrastructure**: Ambient concerns
//!   - `config`: Environment-driven logging settings
//!   - `telemetry`: `tracing` subscriber installation
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use market_data_updates::{DataCoordinate, PointUpdate, SeriesUpdate, TimeSeries, UpdateValue};
//!
//! let coord = DataCoordinate::new("spot").with_dataset("FXSPOT").with_dimension("ccy", "EURUSD");
//! let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//!
//! let series: TimeSeries = [(t, 1.0950)].into_iter().collect();
//! let update: SeriesUpdate = SeriesUpdate::new(series, coord.clone());
//! assert_eq!(update.series.len(), 1);
//!
//! let point: PointUpdate = PointUpdate::new(t, UpdateValue::Numeric(1.0951));
//! assert!(point.coordinate.is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Update records with no I/O.
pub mod domain;

/// Infrastructure layer - Configuration and telemetry.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::coordinate::{CoordinateError, DataCoordinate, DataFrequency};
pub use domain::series::TimeSeries;
pub use domain::updates::{DataUpdate, PointUpdate, SeriesUpdate};
pub use domain::value::UpdateValue;

// Infrastructure config
pub use infrastructure::config::{ConfigError, LoggingSettings};

// Telemetry
pub use infrastructure::telemetry::{TelemetryError, init as init_telemetry};
