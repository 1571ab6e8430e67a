//! Domain Layer - Update records and the types they carry.
//!
//! Everything here is inert data: construction never fails and no type
//! performs I/O. All types support serde serialization without committing
//! to a wire format.

/// Data coordinate descriptor (dataset, measure, dimensions, frequency).
pub mod coordinate;

/// Ordered time-keyed series container.
pub mod series;

/// Series, point and combined update records.
pub mod updates;

/// Point update value.
pub mod value;
