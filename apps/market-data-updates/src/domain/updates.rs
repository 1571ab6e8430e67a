//! Update Records
//!
//! The two shapes of update a market data stream delivers:
//!
//! - [`SeriesUpdate`]: a batch of time-keyed values for one coordinate.
//! - [`PointUpdate`]: a single timestamped value, optionally tied to a
//!   coordinate.
//!
//! [`DataUpdate`] wraps either shape for consumers draining a mixed stream.
//!
//! # Design
//!
//! Records are plain values with public fields, set once at construction
//! and never validated. The coordinate is held behind an [`Arc`] because it
//! is built elsewhere and shared across many updates; the series payload is
//! owned outright.
//!
//! Equality is structural: two records are equal when their fields are
//! equal, including coordinates compared by value. Use
//! [`SeriesUpdate::shares_coordinate`] / [`PointUpdate::shares_coordinate`]
//! to ask whether two records point at the same coordinate instance.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::coordinate::DataCoordinate;
use super::series::TimeSeries;
use super::value::UpdateValue;

// =============================================================================
// Series Update
// =============================================================================

/// Batch update of a time series for one data coordinate.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use chrono::{TimeZone, Utc};
/// use market_data_updates::{DataCoordinate, SeriesUpdate, TimeSeries};
///
/// let coord = Arc::new(DataCoordinate::new("spot").with_dataset("FXSPOT"));
/// let series: TimeSeries = [
///     (Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(), 100.5),
///     (Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(), 101.2),
/// ]
/// .into_iter()
/// .collect();
///
/// let update: SeriesUpdate = SeriesUpdate::new(series, Arc::clone(&coord));
///
/// assert_eq!(update.series.len(), 2);
/// assert!(Arc::ptr_eq(&update.coordinate, &coord));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesUpdate<C = DataCoordinate, V = f64> {
    /// Time-keyed payload.
    pub series: TimeSeries<V>,
    /// Coordinate the series belongs to.
    pub coordinate: Arc<C>,
}

impl<C, V> SeriesUpdate<C, V> {
    /// Create a series update. Both inputs are stored as given.
    #[must_use]
    pub fn new(series: TimeSeries<V>, coordinate: impl Into<Arc<C>>) -> Self {
        Self {
            series,
            coordinate: coordinate.into(),
        }
    }

    /// Whether both updates hold the same coordinate instance.
    #[must_use]
    pub fn shares_coordinate(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.coordinate, &other.coordinate)
    }
}

// =============================================================================
// Point Update
// =============================================================================

/// Single timestamped value, optionally tied to a data coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointUpdate<C = DataCoordinate> {
    /// Time the value applies to.
    pub time: DateTime<Utc>,
    /// Carried value.
    pub value: UpdateValue,
    /// Coordinate the value belongs to, if known.
    pub coordinate: Option<Arc<C>>,
}

impl<C> PointUpdate<C> {
    /// Create a point update with no coordinate.
    #[must_use]
    pub fn new(time: DateTime<Utc>, value: impl Into<UpdateValue>) -> Self {
        Self {
            time,
            value: value.into(),
            coordinate: None,
        }
    }

    /// Create a point update tied to a coordinate.
    #[must_use]
    pub fn with_coordinate(
        time: DateTime<Utc>,
        value: impl Into<UpdateValue>,
        coordinate: impl Into<Arc<C>>,
    ) -> Self {
        Self {
            time,
            value: value.into(),
            coordinate: Some(coordinate.into()),
        }
    }

    /// Whether both updates hold the same coordinate instance.
    ///
    /// Two updates without a coordinate do not share one.
    #[must_use]
    pub fn shares_coordinate(&self, other: &Self) -> bool {
        match (&self.coordinate, &other.coordinate) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

// =============================================================================
// Data Update
// =============================================================================

/// Either shape of update, as drained from a mixed stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DataUpdate<C = DataCoordinate> {
    /// Bulk series update.
    Series(SeriesUpdate<C>),
    /// Single point update.
    Point(PointUpdate<C>),
}

impl<C> DataUpdate<C> {
    /// Coordinate of the update, if it carries one.
    #[must_use]
    pub const fn coordinate(&self) -> Option<&Arc<C>> {
        match self {
            Self::Series(update) => Some(&update.coordinate),
            Self::Point(update) => update.coordinate.as_ref(),
        }
    }

    /// Latest timestamp covered by the update.
    ///
    /// `None` for a series update with an empty series.
    #[must_use]
    pub fn latest_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Series(update) => update.series.end(),
            Self::Point(update) => Some(update.time),
        }
    }

    /// Whether this is a series update.
    #[must_use]
    pub const fn is_series(&self) -> bool {
        matches!(self, Self::Series(_))
    }

    /// Whether this is a point update.
    #[must_use]
    pub const fn is_point(&self) -> bool {
        matches!(self, Self::Point(_))
    }
}

impl<C> From<SeriesUpdate<C>> for DataUpdate<C> {
    fn from(update: SeriesUpdate<C>) -> Self {
        Self::Series(update)
    }
}

impl<C> From<PointUpdate<C>> for DataUpdate<C> {
    fn from(update: PointUpdate<C>) -> Self {
        Self::Point(update)
    }
}

// =============================================================================
// Tests
// =============================================================================
