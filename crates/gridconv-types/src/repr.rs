//! In-memory representation kinds
//!
//! `ReprKind` is the closed set of physical shapes a grid value can take.
//! Two of the kinds are wideners: `Number` covers every numeric shape and
//! `Temporal` covers every date/time shape, so a point set declared with a
//! general kind can claim a point declared with a narrower one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical shape of an in-memory value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReprKind {
    /// UTF-8 text
    Text,
    /// Raw bytes
    Bytes,
    Boolean,
    /// 64-bit signed integer
    Int,
    /// 64-bit float
    Float,
    /// Exact decimal
    Decimal,
    /// Any numeric shape
    Number,
    Date,
    Time,
    /// Date and time without zone
    Timestamp,
    /// Date and time with a fixed offset
    TimestampTz,
    /// Any date/time shape
    Temporal,
    Uuid,
    /// Structured value (map, array, document)
    Object,
}

impl ReprKind {
    /// Can a value of kind `other` be used where this kind is declared?
    ///
    /// Mirrors class assignability: every kind accepts itself, and the
    /// `Number` / `Temporal` wideners accept their narrower kinds.
    pub fn is_assignable_from(&self, other: ReprKind) -> bool {
        if *self == other {
            return true;
        }
        match self {
            Self::Number => matches!(other, Self::Int | Self::Float | Self::Decimal),
            Self::Temporal => matches!(
                other,
                Self::Date | Self::Time | Self::Timestamp | Self::TimestampTz
            ),
            _ => false,
        }
    }

    /// Display name of this kind
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::Boolean => "boolean",
            Self::Int => "int",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Number => "number",
            Self::Date => "date",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::TimestampTz => "timestamp-tz",
            Self::Temporal => "temporal",
            Self::Uuid => "uuid",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ReprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
