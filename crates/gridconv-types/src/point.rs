//! Conversion points
//!
//! A `ConversionPoint` names one concrete way a logical column type is held
//! in memory, e.g. a timestamp column materialized as a naive timestamp
//! versus as a generic temporal accessor. The fixed catalog in [`points`]
//! covers every (logical type, representation) combination the grid
//! supports.

use crate::{LogicalType, ReprKind};
use std::fmt;

/// One (name, logical type, representation) triple.
///
/// Equality and hashing are structural over all three fields: points act as
/// lookup keys and as membership probes against point sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversionPoint {
    pub name: &'static str,
    pub logical_type: LogicalType,
    pub repr: ReprKind,
}

impl ConversionPoint {
    /// Create a new point
    pub const fn new(name: &'static str, logical_type: LogicalType, repr: ReprKind) -> Self {
        Self {
            name,
            logical_type,
            repr,
        }
    }

    /// Copy of this point with a different representation kind.
    ///
    /// Used to probe with a narrower shape without changing semantics, e.g.
    /// `points::INTEGER.with_repr(ReprKind::Int)`.
    pub const fn with_repr(self, repr: ReprKind) -> Self {
        Self { repr, ..self }
    }
}

impl fmt::Display for ConversionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} as {}", self.name, self.repr)
    }
}

/// The fixed point catalog.
///
/// Declaration order here matches the registration order of the standard
/// point sets; dialects map their native column types onto these constants.
pub mod points {
    use super::ConversionPoint;
    use crate::{LogicalType as L, ReprKind as R};

    // === Character types ===
    pub const TEXT: ConversionPoint = ConversionPoint::new("text", L::Text, R::Text);
    pub const CHAR: ConversionPoint = ConversionPoint::new("char", L::Char, R::Text);
    pub const VARCHAR: ConversionPoint = ConversionPoint::new("varchar", L::Varchar, R::Text);
    pub const NCHAR: ConversionPoint = ConversionPoint::new("nchar", L::Nchar, R::Text);
    pub const NVARCHAR: ConversionPoint = ConversionPoint::new("nvarchar", L::Nvarchar, R::Text);
    pub const CLOB: ConversionPoint = ConversionPoint::new("clob", L::Clob, R::Text);
    pub const NCLOB: ConversionPoint = ConversionPoint::new("nclob", L::Nclob, R::Text);

    // === Bit strings ("0"/"1" digit text) ===
    pub const BIT_TEXT: ConversionPoint = ConversionPoint::new("binary string", L::Bit, R::Text);

    // === Numeric types, declared with the general Number shape ===
    pub const TINYINT: ConversionPoint = ConversionPoint::new("tinyint", L::Tinyint, R::Number);
    pub const SMALLINT: ConversionPoint = ConversionPoint::new("smallint", L::Smallint, R::Number);
    pub const INTEGER: ConversionPoint = ConversionPoint::new("integer", L::Integer, R::Number);
    pub const BIGINT: ConversionPoint = ConversionPoint::new("bigint", L::Bigint, R::Number);
    pub const REAL: ConversionPoint = ConversionPoint::new("real", L::Real, R::Number);
    pub const FLOAT: ConversionPoint = ConversionPoint::new("float", L::Float, R::Number);
    pub const DOUBLE: ConversionPoint = ConversionPoint::new("double", L::Double, R::Number);
    pub const DECIMAL: ConversionPoint = ConversionPoint::new("decimal", L::Decimal, R::Number);
    pub const NUMERIC: ConversionPoint = ConversionPoint::new("numeric", L::Numeric, R::Number);

    // === Booleans ===
    pub const BOOLEAN: ConversionPoint = ConversionPoint::new("boolean", L::Boolean, R::Boolean);
    pub const BIT_BOOLEAN: ConversionPoint = ConversionPoint::new("bit", L::Bit, R::Boolean);

    // === Temporal types ===
    pub const DATE: ConversionPoint = ConversionPoint::new("date", L::Date, R::Date);
    pub const TIME: ConversionPoint = ConversionPoint::new("time", L::Time, R::Time);
    pub const TIME_TZ: ConversionPoint =
        ConversionPoint::new("time with time zone", L::TimeTz, R::Time);
    pub const TIMESTAMP: ConversionPoint =
        ConversionPoint::new("timestamp", L::Timestamp, R::Timestamp);
    pub const TIMESTAMP_TZ: ConversionPoint =
        ConversionPoint::new("timestamp with time zone", L::TimestampTz, R::TimestampTz);

    // === Temporal types surfaced through the generic accessor shape ===
    pub const DATE_ACCESSOR: ConversionPoint =
        ConversionPoint::new("date accessor", L::Date, R::Temporal);
    pub const TIME_ACCESSOR: ConversionPoint =
        ConversionPoint::new("time accessor", L::Time, R::Temporal);
    pub const TIMESTAMP_ACCESSOR: ConversionPoint =
        ConversionPoint::new("timestamp accessor", L::Timestamp, R::Temporal);
    pub const TIMESTAMP_TZ_ACCESSOR: ConversionPoint =
        ConversionPoint::new("timestamp tz accessor", L::TimestampTz, R::Temporal);

    // === Identifiers ===
    pub const UUID: ConversionPoint = ConversionPoint::new("uuid", L::Uuid, R::Uuid);
    pub const UUID_TEXT: ConversionPoint = ConversionPoint::new("uuid text", L::Uuid, R::Text);

    // === Raw binary ===
    pub const BINARY: ConversionPoint = ConversionPoint::new("binary", L::Binary, R::Bytes);
    pub const BLOB: ConversionPoint = ConversionPoint::new("blob", L::Blob, R::Bytes);

    // === Structured values ===
    pub const OBJECT: ConversionPoint = ConversionPoint::new("object", L::Object, R::Object);
    pub const ARRAY: ConversionPoint = ConversionPoint::new("array", L::Array, R::Object);
    pub const JSON: ConversionPoint = ConversionPoint::new("json", L::Json, R::Object);

    // === Documents carried as text ===
    pub const JSON_TEXT: ConversionPoint = ConversionPoint::new("json text", L::Json, R::Text);
    pub const XML_TEXT: ConversionPoint = ConversionPoint::new("xml text", L::Xml, R::Text);

    /// Every catalog point, in declaration order
    pub const ALL: &[ConversionPoint] = &[
        TEXT,
        CHAR,
        VARCHAR,
        NCHAR,
        NVARCHAR,
        CLOB,
        NCLOB,
        BIT_TEXT,
        TINYINT,
        SMALLINT,
        INTEGER,
        BIGINT,
        REAL,
        FLOAT,
        DOUBLE,
        DECIMAL,
        NUMERIC,
        BOOLEAN,
        BIT_BOOLEAN,
        DATE,
        TIME,
        TIME_TZ,
        TIMESTAMP,
        TIMESTAMP_TZ,
        DATE_ACCESSOR,
        TIME_ACCESSOR,
        TIMESTAMP_ACCESSOR,
        TIMESTAMP_TZ_ACCESSOR,
        UUID,
        UUID_TEXT,
        BINARY,
        BLOB,
        OBJECT,
        ARRAY,
        JSON,
        JSON_TEXT,
        XML_TEXT,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = ConversionPoint::new("text", LogicalType::Text, ReprKind::Text);
        assert_eq!(a, points::TEXT);
        assert_ne!(a.with_repr(ReprKind::Bytes), points::TEXT);
    }

    #[test]
    fn test_with_repr_keeps_semantics() {
        let narrowed = points::INTEGER.with_repr(ReprKind::Int);
        assert_eq!(narrowed.name, points::INTEGER.name);
        assert_eq!(narrowed.logical_type, points::INTEGER.logical_type);
        assert_eq!(narrowed.repr, ReprKind::Int);
    }

    #[test]
    fn test_catalog_has_no_duplicate_points() {
        for (i, a) in points::ALL.iter().enumerate() {
            for b in &points::ALL[i + 1..] {
                assert_ne!(a, b, "duplicate catalog entry {a}");
            }
        }
    }
}
