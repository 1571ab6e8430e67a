//! Data Coordinate
//!
//! Identifies what a piece of market data describes: a measure (e.g. `spot`,
//! `impliedVolatility`) within an optional dataset, narrowed by a set of
//! named dimensions (e.g. `assetId`, `tenor`) at a given frequency.
//!
//! Update records are generic over their coordinate type, so this is only
//! the default descriptor. It performs no validation: any measure, dataset
//! or dimension values are accepted as given.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while interpreting coordinate components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    /// Frequency name is not one of `daily`, `realTime`, `any`.
    #[error("unknown data frequency: {0}")]
    UnknownFrequency(String),
}

// =============================================================================
// Frequency
// =============================================================================

/// Sampling frequency of the data a coordinate points at.
///
/// Serializes as the camelCase wire name; parsing and deserializing both
/// accept any casing of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DataFrequency {
    /// End-of-day data.
    Daily,
    /// Intraday / tick data.
    RealTime,
    /// No frequency constraint.
    #[default]
    Any,
}

impl DataFrequency {
    /// Wire name of the frequency.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::RealTime => "realTime",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for DataFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataFrequency {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "realtime" => Ok(Self::RealTime),
            "any" => Ok(Self::Any),
            _ => Err(CoordinateError::UnknownFrequency(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for DataFrequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Coordinate
// =============================================================================

/// A market data coordinate.
///
/// # Example
///
/// ```rust
/// use market_data_updates::{DataCoordinate, DataFrequency};
///
/// let coord = DataCoordinate::new("impliedVolatility")
///     .with_dataset("EDRVOL_PERCENT_STANDARD")
///     .with_dimension("assetId", "MA4B66MW5E27U8P32SB")
///     .with_dimension("tenor", "1m")
///     .with_frequency(DataFrequency::Daily);
///
/// assert_eq!(coord.dimension("tenor"), Some("1m"));
/// assert_eq!(
///     coord.to_string(),
///     "EDRVOL_PERCENT_STANDARD:impliedVolatility{assetId=MA4B66MW5E27U8P32SB,tenor=1m}@daily"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataCoordinate {
    /// Measure name.
    pub measure: String,
    /// Dataset the measure belongs to, if pinned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    /// Dimension name to value.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dimensions: BTreeMap<String, String>,
    /// Sampling frequency.
    #[serde(default)]
    pub frequency: DataFrequency,
}

impl DataCoordinate {
    /// Create a coordinate for a measure with no dataset, dimensions or
    /// frequency constraint.
    #[must_use]
    pub fn new(measure: impl Into<String>) -> Self {
        Self {
            measure: measure.into(),
            dataset_id: None,
            dimensions: BTreeMap::new(),
            frequency: DataFrequency::default(),
        }
    }

    /// Pin the coordinate to a dataset.
    #[must_use]
    pub fn with_dataset(mut self, dataset_id: impl Into<String>) -> Self {
        self.dataset_id = Some(dataset_id.into());
        self
    }

    /// Add or replace a dimension.
    #[must_use]
    pub fn with_dimension(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.dimensions.insert(name.into(), value.into());
        self
    }

    /// Set the frequency.
    #[must_use]
    pub const fn with_frequency(mut self, frequency: DataFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Look up a dimension value.
    #[must_use]
    pub fn dimension(&self, name: &str) -> Option<&str> {
        self.dimensions.get(name).map(String::as_str)
    }
}

impl fmt::Display for DataCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(dataset) = &self.dataset_id {
            write!(f, "{dataset}:")?;
        }
        f.write_str(&self.measure)?;

        if !self.dimensions.is_empty() {
            f.write_str("{")?;
            for (i, (name, value)) in self.dimensions.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{name}={value}")?;
            }
            f.write_str("}")?;
        }

        write!(f, "@{}", self.frequency)
    }
}

// =============================================================================
// Tests
// =============================================================================
