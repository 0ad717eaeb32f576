//! Type domain for the gridconv conversion graph
//!
//! This crate defines the static type vocabulary the conversion graph is
//! built over:
//! - `LogicalType` - abstract column domains with pairwise suitability scoring
//! - `ReprKind` - the closed set of in-memory representations
//! - `GridValue` - runtime representation of a single cell value
//! - `ConversionPoint` - one concrete (logical type, representation) pairing
//! - `PointSet` / `PointSetRegistry` - groups of points sharing a
//!   representation, the nodes of the conversion graph

pub mod logical;
pub mod point;
pub mod point_set;
pub mod repr;
pub mod value;

pub use logical::{LogicalType, NumberCategory, MAX_SUITABILITY};
pub use point::{points, ConversionPoint};
pub use point_set::{PointSet, PointSetId, PointSetRegistry};
pub use repr::ReprKind;
pub use value::GridValue;
