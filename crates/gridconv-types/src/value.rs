//! Runtime representation of a single grid cell value

use crate::ReprKind;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// One cell value as held in memory.
///
/// `Null` stands for SQL NULL and survives every conversion unchanged: all
/// converters pass it through rather than treating it as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum GridValue {
    Null,
    Text(String),
    Bytes(Vec<u8>),
    Boolean(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<FixedOffset>),
    Uuid(Uuid),
    Object(serde_json::Value),
}

impl GridValue {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Representation kind of this value, `None` for null
    pub fn repr(&self) -> Option<ReprKind> {
        match self {
            Self::Null => None,
            Self::Text(_) => Some(ReprKind::Text),
            Self::Bytes(_) => Some(ReprKind::Bytes),
            Self::Boolean(_) => Some(ReprKind::Boolean),
            Self::Int(_) => Some(ReprKind::Int),
            Self::Float(_) => Some(ReprKind::Float),
            Self::Decimal(_) => Some(ReprKind::Decimal),
            Self::Date(_) => Some(ReprKind::Date),
            Self::Time(_) => Some(ReprKind::Time),
            Self::Timestamp(_) => Some(ReprKind::Timestamp),
            Self::TimestampTz(_) => Some(ReprKind::TimestampTz),
            Self::Uuid(_) => Some(ReprKind::Uuid),
            Self::Object(_) => Some(ReprKind::Object),
        }
    }

    /// Name of this value's shape, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self.repr() {
            Some(kind) => kind.name(),
            None => "null",
        }
    }

    /// Is this one of the numeric shapes?
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_) | Self::Decimal(_))
    }

    /// Numeric value as f64, when this is a numeric shape
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Decimal(d) => d.to_f64(),
            _ => None,
        }
    }

    /// Try to get as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for GridValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Text(s) => f.write_str(s),
            Self::Bytes(b) => write!(f, "{} bytes", b.len()),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::Time(t) => write!(f, "{t}"),
            Self::Timestamp(ts) => write!(f, "{ts}"),
            Self::TimestampTz(ts) => write!(f, "{ts}"),
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Object(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repr_of_values() {
        assert_eq!(GridValue::Null.repr(), None);
        assert_eq!(GridValue::Int(1).repr(), Some(ReprKind::Int));
        assert_eq!(
            GridValue::Text("x".into()).repr(),
            Some(ReprKind::Text)
        );
    }

    #[test]
    fn test_as_f64_across_numeric_shapes() {
        assert_eq!(GridValue::Int(2).as_f64(), Some(2.0));
        assert_eq!(GridValue::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(GridValue::Decimal(Decimal::new(25, 1)).as_f64(), Some(2.5));
        assert_eq!(GridValue::Boolean(true).as_f64(), None);
    }
}
