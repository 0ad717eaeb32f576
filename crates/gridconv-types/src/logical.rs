//! Logical column types and suitability scoring
//!
//! A `LogicalType` is the abstract semantic category of a value ("a
//! timestamp", "a piece of text"), independent of how it is held in memory.
//! The `suitability` table ranks how good a substitute one logical type is
//! for another when the grid has to coerce data into a different column
//! type. Scores are asymmetric and hand-tuned per pair.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score returned when the target type is identical to the source type.
pub const MAX_SUITABILITY: u32 = u32::MAX;

/// Abstract column domains understood by the conversion graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalType {
    // === Text ===
    Text,
    Char,
    Varchar,
    Nchar,
    Nvarchar,
    Clob,
    Nclob,

    // === Numeric ===
    Tinyint,
    Smallint,
    Integer,
    Bigint,
    Real,
    Float,
    Double,
    Decimal,
    Numeric,

    // === Boolean ===
    Boolean,
    Bit,

    // === Temporal ===
    Date,
    Time,
    TimeTz,
    Timestamp,
    TimestampTz,

    // === Identifiers ===
    Uuid,

    // === Documents ===
    Json,
    Xml,

    // === Binary ===
    Binary,
    Blob,

    // === Structured ===
    Object,
    Array,

    /// Column type the dialect could not classify
    Unknown,
}

/// Secondary classification used when ranking numeric substitutions.
///
/// Same-category pairs (integer to integer, decimal to decimal) always
/// outrank cross-category pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberCategory {
    /// Whole-number types
    Integer,
    /// Fractional / exact-decimal types
    Decimal,
}

impl NumberCategory {
    /// Classify a logical type, `None` for non-numeric types
    pub const fn of(ty: LogicalType) -> Option<NumberCategory> {
        match ty {
            LogicalType::Tinyint
            | LogicalType::Smallint
            | LogicalType::Integer
            | LogicalType::Bigint => Some(NumberCategory::Integer),
            LogicalType::Real
            | LogicalType::Float
            | LogicalType::Double
            | LogicalType::Decimal
            | LogicalType::Numeric => Some(NumberCategory::Decimal),
            _ => None,
        }
    }
}

impl LogicalType {
    /// Every logical type, in declaration order
    pub const ALL: &'static [LogicalType] = &[
        Self::Text,
        Self::Char,
        Self::Varchar,
        Self::Nchar,
        Self::Nvarchar,
        Self::Clob,
        Self::Nclob,
        Self::Tinyint,
        Self::Smallint,
        Self::Integer,
        Self::Bigint,
        Self::Real,
        Self::Float,
        Self::Double,
        Self::Decimal,
        Self::Numeric,
        Self::Boolean,
        Self::Bit,
        Self::Date,
        Self::Time,
        Self::TimeTz,
        Self::Timestamp,
        Self::TimestampTz,
        Self::Uuid,
        Self::Json,
        Self::Xml,
        Self::Binary,
        Self::Blob,
        Self::Object,
        Self::Array,
        Self::Unknown,
    ];

    /// Display name of this type
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Char => "char",
            Self::Varchar => "varchar",
            Self::Nchar => "nchar",
            Self::Nvarchar => "nvarchar",
            Self::Clob => "clob",
            Self::Nclob => "nclob",
            Self::Tinyint => "tinyint",
            Self::Smallint => "smallint",
            Self::Integer => "integer",
            Self::Bigint => "bigint",
            Self::Real => "real",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::Numeric => "numeric",
            Self::Boolean => "boolean",
            Self::Bit => "bit",
            Self::Date => "date",
            Self::Time => "time",
            Self::TimeTz => "time with time zone",
            Self::Timestamp => "timestamp",
            Self::TimestampTz => "timestamp with time zone",
            Self::Uuid => "uuid",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Binary => "binary",
            Self::Blob => "blob",
            Self::Object => "object",
            Self::Array => "array",
            Self::Unknown => "unknown",
        }
    }

    /// Is this a character type?
    pub const fn is_text(&self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Char
                | Self::Varchar
                | Self::Nchar
                | Self::Nvarchar
                | Self::Clob
                | Self::Nclob
        )
    }

    /// Is this a numeric type?
    pub const fn is_numeric(&self) -> bool {
        NumberCategory::of(*self).is_some()
    }

    /// Is this a date/time type?
    pub const fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::Date | Self::Time | Self::TimeTz | Self::Timestamp | Self::TimestampTz
        )
    }

    /// How suitable `other` is as a substitute target for this type.
    ///
    /// Returns [`MAX_SUITABILITY`] when the types are identical, a positive
    /// score when `other` is an acceptable substitute (higher = more
    /// preferred) and `0` when the pair is not interchangeable. The table is
    /// asymmetric: `Text` ranks `Clob` above `Nchar`, but `Clob` ranks
    /// `Text` above everything else. Never panics; unlisted pairs score 0.
    pub fn suitability(&self, other: LogicalType) -> u32 {
        if *self == other {
            return MAX_SUITABILITY;
        }
        if self.is_text() && other.is_text() {
            return text_suitability(*self, other);
        }
        if self.is_numeric() && other.is_numeric() {
            return numeric_suitability(*self, other);
        }
        if self.is_temporal() && other.is_temporal() {
            return temporal_suitability(*self, other);
        }
        match (*self, other) {
            // Bit columns are booleans in most dialects
            (Self::Boolean, Self::Bit) | (Self::Bit, Self::Boolean) => 90,
            (Self::Boolean | Self::Bit, t) if t.is_text() => 20,
            (Self::Boolean | Self::Bit, t) if t.is_numeric() => 30,

            // Uuid prefers uuid-shaped text over generic text
            (Self::Uuid, Self::Varchar) => 60,
            (Self::Uuid, Self::Text) => 50,
            (Self::Uuid, Self::Char) => 40,

            // Documents degrade to character lobs first
            (Self::Json, Self::Clob) => 60,
            (Self::Json, Self::Text) => 50,
            (Self::Json, Self::Varchar) => 30,
            (Self::Xml, Self::Clob) => 60,
            (Self::Xml, Self::Text) => 50,
            (Self::Json, Self::Xml) | (Self::Xml, Self::Json) => 20,

            // Raw binary
            (Self::Binary, Self::Blob) | (Self::Blob, Self::Binary) => 90,
            (Self::Binary | Self::Blob, Self::Bit) => 20,

            // Structured values serialize naturally into json
            (Self::Object, Self::Json) => 70,
            (Self::Array, Self::Json) => 60,
            (Self::Object, Self::Text) => 40,
            (Self::Array, Self::Text) => 30,
            (Self::Object, Self::Array) | (Self::Array, Self::Object) => 30,

            _ => 0,
        }
    }
}

fn text_suitability(from: LogicalType, to: LogicalType) -> u32 {
    use LogicalType::*;
    match (from, to) {
        // Unbounded text degrades into lobs before fixed-width national types
        (Text, Varchar) => 90,
        (Text, Clob) => 80,
        (Text, Nvarchar) => 60,
        (Text, Char) => 55,
        (Text, Nclob) => 50,
        (Text, Nchar) => 40,

        (Varchar, Text) => 90,
        (Varchar, Clob) => 70,
        (Varchar, Char) => 65,
        (Char, Varchar) => 90,
        (Char, Text) => 80,

        // National variants prefer each other
        (Nchar, Nvarchar) => 90,
        (Nvarchar, Nchar) => 85,
        (Nchar | Nvarchar, Nclob) => 70,
        (Nclob, Nvarchar) => 80,
        (Nclob, Nchar) => 70,

        (Clob, Text) => 90,
        (Clob, Varchar) => 70,
        (Clob, Nclob) => 60,
        (Nclob, Clob) => 80,

        // Any two character types can stand in for each other at a pinch
        _ => 30,
    }
}

fn numeric_suitability(from: LogicalType, to: LogicalType) -> u32 {
    use LogicalType::*;
    // Widening to the next size up is the preferred substitution
    let widening = matches!(
        (from, to),
        (Tinyint, Smallint)
            | (Smallint, Integer)
            | (Integer, Bigint)
            | (Real, Double)
            | (Float, Double)
            | (Decimal, Numeric)
            | (Numeric, Decimal)
    );
    if widening {
        return 90;
    }
    match (NumberCategory::of(from), NumberCategory::of(to)) {
        (Some(a), Some(b)) if a == b => 80,
        (Some(_), Some(_)) => 40,
        _ => 0,
    }
}

fn temporal_suitability(from: LogicalType, to: LogicalType) -> u32 {
    use LogicalType::*;
    match (from, to) {
        // Zone-aware and naive flavors of the same instant kind
        (Timestamp, TimestampTz) | (TimestampTz, Timestamp) => 90,
        (Time, TimeTz) | (TimeTz, Time) => 90,

        // Lifting into a timestamp keeps all information
        (Date, Timestamp) => 70,
        (Time, Timestamp) => 60,
        (Date, TimestampTz) => 60,

        // Projections lose a component
        (Timestamp, Date) => 50,
        (Timestamp, Time) => 40,
        (TimestampTz, Date) => 40,

        _ => 20,
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suitability_reflexive() {
        for &ty in LogicalType::ALL {
            assert_eq!(ty.suitability(ty), MAX_SUITABILITY, "{ty} not reflexive");
        }
    }

    #[test]
    fn test_suitability_total() {
        // Every pair must produce a score without panicking
        for &a in LogicalType::ALL {
            for &b in LogicalType::ALL {
                let _ = a.suitability(b);
            }
        }
    }

    #[test]
    fn test_text_prefers_clob_over_nchar() {
        let clob = LogicalType::Text.suitability(LogicalType::Clob);
        let nchar = LogicalType::Text.suitability(LogicalType::Nchar);
        assert!(clob > nchar);
    }

    #[test]
    fn test_same_number_category_outranks_cross() {
        let same = LogicalType::Integer.suitability(LogicalType::Tinyint);
        let cross = LogicalType::Integer.suitability(LogicalType::Double);
        assert!(same > cross);
    }

    #[test]
    fn test_suitability_asymmetric() {
        // Uuid degrades into text, but text is not a uuid
        assert!(LogicalType::Uuid.suitability(LogicalType::Text) > 0);
        assert_eq!(LogicalType::Text.suitability(LogicalType::Uuid), 0);
    }

    #[test]
    fn test_predicates() {
        assert!(LogicalType::Nclob.is_text());
        assert!(LogicalType::Numeric.is_numeric());
        assert!(LogicalType::TimeTz.is_temporal());
        assert!(!LogicalType::Uuid.is_text());
        assert!(!LogicalType::Bit.is_numeric());
    }

    #[test]
    fn test_number_category() {
        assert_eq!(
            NumberCategory::of(LogicalType::Bigint),
            Some(NumberCategory::Integer)
        );
        assert_eq!(
            NumberCategory::of(LogicalType::Numeric),
            Some(NumberCategory::Decimal)
        );
        assert_eq!(NumberCategory::of(LogicalType::Uuid), None);
    }
}
