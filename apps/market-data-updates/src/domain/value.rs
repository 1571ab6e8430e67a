//! Point Update Value
//!
//! A point update carries exactly one of: nothing, a text label, or a number.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Value carried by a point update.
///
/// Serializes untagged: `null`, a string, or a number. Non-finite numbers
/// (`NaN`, `±inf`) fail to serialize rather than collapsing to `null`, which
/// would read back as [`UpdateValue::Absent`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UpdateValue {
    /// No value (e.g. a cleared field).
    #[default]
    Absent,
    /// Numeric value.
    Numeric(#[serde(serialize_with = "serialize_finite")] f64),
    /// Text label (e.g. a status or rating).
    Text(String),
}

impl UpdateValue {
    /// Whether the value is absent.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The numeric payload, if any.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(v) => Some(*v),
            _ => None,
        }
    }

    /// The text payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(serde::ser::Error::custom(format!(
            "non-finite numeric value {value} cannot be serialized"
        )))
    }
}

impl fmt::Display for UpdateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => Ok(()),
            Self::Numeric(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for UpdateValue {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<String> for UpdateValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for UpdateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for UpdateValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}
