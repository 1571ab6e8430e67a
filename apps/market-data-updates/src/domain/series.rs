//! Time Series Container
//!
//! An ordered mapping from UTC timestamp to value. Iteration is always in
//! ascending time order and each timestamp holds at most one value.

use std::collections::BTreeMap;
use std::collections::btree_map;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Time-keyed ordered series.
///
/// Owns its points: cloning a series copies them, so two series never share
/// storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeries<V = f64> {
    points: BTreeMap<DateTime<Utc>, V>,
}

impl<V> TimeSeries<V> {
    /// Create an empty series.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: BTreeMap::new(),
        }
    }

    /// Insert a point, returning the value it replaced.
    pub fn insert(&mut self, time: DateTime<Utc>, value: V) -> Option<V> {
        self.points.insert(time, value)
    }

    /// Value at an exact timestamp.
    #[must_use]
    pub fn get(&self, time: &DateTime<Utc>) -> Option<&V> {
        self.points.get(time)
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate points in ascending time order.
    pub fn iter(&self) -> btree_map::Iter<'_, DateTime<Utc>, V> {
        self.points.iter()
    }

    /// Earliest point.
    #[must_use]
    pub fn first(&self) -> Option<(&DateTime<Utc>, &V)> {
        self.points.first_key_value()
    }

    /// Latest point.
    #[must_use]
    pub fn last(&self) -> Option<(&DateTime<Utc>, &V)> {
        self.points.last_key_value()
    }

    /// Timestamp of the earliest point.
    #[must_use]
    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.first().map(|(t, _)| *t)
    }

    /// Timestamp of the latest point.
    #[must_use]
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.last().map(|(t, _)| *t)
    }

    /// Merge another series into this one.
    ///
    /// Points from `other` win on timestamp collisions. Returns the number of
    /// existing points that were overwritten.
    pub fn merge(&mut self, other: Self) -> usize {
        let incoming = other.len();
        let mut overwritten = 0;

        for (time, value) in other.points {
            if self.points.insert(time, value).is_some() {
                overwritten += 1;
            }
        }

        if overwritten > 0 {
            tracing::debug!(
                incoming,
                overwritten,
                total = self.points.len(),
                "Merged series with overlapping timestamps"
            );
        }

        overwritten
    }

    /// Consume and return the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<DateTime<Utc>, V> {
        self.points
    }
}

impl<V> Default for TimeSeries<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(DateTime<Utc>, V)> for TimeSeries<V> {
    fn from_iter<I: IntoIterator<Item = (DateTime<Utc>, V)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<V> From<BTreeMap<DateTime<Utc>, V>> for TimeSeries<V> {
    fn from(points: BTreeMap<DateTime<Utc>, V>) -> Self {
        Self { points }
    }
}

impl<V> IntoIterator for TimeSeries<V> {
    type Item = (DateTime<Utc>, V);
    type IntoIter = btree_map::IntoIter<DateTime<Utc>, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a TimeSeries<V> {
    type Item = (&'a DateTime<Utc>, &'a V);
    type IntoIter = btree_map::Iter<'a, DateTime<Utc>, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
