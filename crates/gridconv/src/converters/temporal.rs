//! Date and time conversions
//!
//! Formatter-backed converters build their formatter once, in the
//! constructor; formatter construction touches the shared formats cache and
//! must not happen per converted value. Time-only values are lifted into
//! timestamps with the session anchor date.

use crate::{ConvertError, ConvertResult, DataConverter};
use chrono::{DateTime, FixedOffset, NaiveDate};
use gridconv_format::{
    DateFormatter, FormatterCreator, TimeFormatter, TimestampFormatter, TimestampTzFormatter,
};
use gridconv_types::{GridValue, PointSetId};

/// dates <-> texts, through the session date formatter
pub struct DateToText {
    start: PointSetId,
    end: PointSetId,
    formatter: DateFormatter,
}

impl DateToText {
    pub fn new(start: PointSetId, end: PointSetId, creator: &FormatterCreator) -> Self {
        Self {
            start,
            end,
            formatter: creator.date_formatter(),
        }
    }
}

impl DataConverter for DateToText {
    fn name(&self) -> &'static str {
        "DateToText"
    }

    fn start(&self) -> PointSetId {
        self.start
    }

    fn end(&self) -> PointSetId {
        self.end
    }

    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Date(d) => Ok(GridValue::Text(self.formatter.format(*d))),
            other => Err(ConvertError::mismatch(
                self.name(),
                "date",
                other.kind_name(),
            )),
        }
    }

    fn reverse_not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Text(s) => Ok(self
                .formatter
                .parse(s)
                .map(GridValue::Date)
                .unwrap_or(GridValue::Null)),
            other => Err(ConvertError::mismatch(
                self.name(),
                "text",
                other.kind_name(),
            )),
        }
    }
}

/// times <-> texts
pub struct TimeToText {
    start: PointSetId,
    end: PointSetId,
    formatter: TimeFormatter,
}

impl TimeToText {
    pub fn new(start: PointSetId, end: PointSetId, creator: &FormatterCreator) -> Self {
        Self {
            start,
            end,
            formatter: creator.time_formatter(),
        }
    }
}

impl DataConverter for TimeToText {
    fn name(&self) -> &'static str {
        "TimeToText"
    }

    fn start(&self) -> PointSetId {
        self.start
    }

    fn end(&self) -> PointSetId {
        self.end
    }

    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Time(t) => Ok(GridValue::Text(self.formatter.format(*t))),
            other => Err(ConvertError::mismatch(
                self.name(),
                "time",
                other.kind_name(),
            )),
        }
    }

    fn reverse_not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Text(s) => Ok(self
                .formatter
                .parse(s)
                .map(GridValue::Time)
                .unwrap_or(GridValue::Null)),
            other => Err(ConvertError::mismatch(
                self.name(),
                "text",
                other.kind_name(),
            )),
        }
    }
}

/// timestamps <-> texts
pub struct TimestampToText {
    start: PointSetId,
    end: PointSetId,
    formatter: TimestampFormatter,
}

impl TimestampToText {
    pub fn new(start: PointSetId, end: PointSetId, creator: &FormatterCreator) -> Self {
        Self {
            start,
            end,
            formatter: creator.timestamp_formatter(),
        }
    }
}

impl DataConverter for TimestampToText {
    fn name(&self) -> &'static str {
        "TimestampToText"
    }

    fn start(&self) -> PointSetId {
        self.start
    }

    fn end(&self) -> PointSetId {
        self.end
    }

    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Timestamp(ts) => Ok(GridValue::Text(self.formatter.format(*ts))),
            other => Err(ConvertError::mismatch(
                self.name(),
                "timestamp",
                other.kind_name(),
            )),
        }
    }

    fn reverse_not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Text(s) => Ok(self
                .formatter
                .parse(s)
                .map(GridValue::Timestamp)
                .unwrap_or(GridValue::Null)),
            other => Err(ConvertError::mismatch(
                self.name(),
                "text",
                other.kind_name(),
            )),
        }
    }
}

/// zoned timestamps <-> texts
pub struct TimestampTzToText {
    start: PointSetId,
    end: PointSetId,
    formatter: TimestampTzFormatter,
}

impl TimestampTzToText {
    pub fn new(start: PointSetId, end: PointSetId, creator: &FormatterCreator) -> Self {
        Self {
            start,
            end,
            formatter: creator.timestamp_tz_formatter(),
        }
    }
}

impl DataConverter for TimestampTzToText {
    fn name(&self) -> &'static str {
        "TimestampTzToText"
    }

    fn start(&self) -> PointSetId {
        self.start
    }

    fn end(&self) -> PointSetId {
        self.end
    }

    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::TimestampTz(ts) => Ok(GridValue::Text(self.formatter.format(*ts))),
            other => Err(ConvertError::mismatch(
                self.name(),
                "zoned timestamp",
                other.kind_name(),
            )),
        }
    }

    fn reverse_not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Text(s) => Ok(self
                .formatter
                .parse(s)
                .map(GridValue::TimestampTz)
                .unwrap_or(GridValue::Null)),
            other => Err(ConvertError::mismatch(
                self.name(),
                "text",
                other.kind_name(),
            )),
        }
    }
}

/// dates <-> timestamps: midnight lift, date projection back
pub struct DateToTimestamp {
    start: PointSetId,
    end: PointSetId,
}

impl DateToTimestamp {
    pub fn new(start: PointSetId, end: PointSetId) -> Self {
        Self { start, end }
    }
}

impl DataConverter for DateToTimestamp {
    fn name(&self) -> &'static str {
        "DateToTimestamp"
    }

    fn start(&self) -> PointSetId {
        self.start
    }

    fn end(&self) -> PointSetId {
        self.end
    }

    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Date(d) => Ok(d
                .and_hms_opt(0, 0, 0)
                .map(GridValue::Timestamp)
                .unwrap_or(GridValue::Null)),
            other => Err(ConvertError::mismatch(
                self.name(),
                "date",
                other.kind_name(),
            )),
        }
    }

    fn reverse_not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Timestamp(ts) => Ok(GridValue::Date(ts.date())),
            other => Err(ConvertError::mismatch(
                self.name(),
                "timestamp",
                other.kind_name(),
            )),
        }
    }
}

/// times <-> timestamps: the session anchor date supplies the missing
/// date component
pub struct TimeToTimestamp {
    start: PointSetId,
    end: PointSetId,
    anchor: NaiveDate,
}

impl TimeToTimestamp {
    pub fn new(start: PointSetId, end: PointSetId, creator: &FormatterCreator) -> Self {
        Self {
            start,
            end,
            anchor: creator.settings().anchor_date,
        }
    }
}

impl DataConverter for TimeToTimestamp {
    fn name(&self) -> &'static str {
        "TimeToTimestamp"
    }

    fn start(&self) -> PointSetId {
        self.start
    }

    fn end(&self) -> PointSetId {
        self.end
    }

    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Time(t) => Ok(GridValue::Timestamp(self.anchor.and_time(*t))),
            other => Err(ConvertError::mismatch(
                self.name(),
                "time",
                other.kind_name(),
            )),
        }
    }

    fn reverse_not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Timestamp(ts) => Ok(GridValue::Time(ts.time())),
            other => Err(ConvertError::mismatch(
                self.name(),
                "timestamp",
                other.kind_name(),
            )),
        }
    }
}

/// naive timestamps <-> zoned timestamps, via the session offset
pub struct TimestampToTimestampTz {
    start: PointSetId,
    end: PointSetId,
    offset: FixedOffset,
}

impl TimestampToTimestampTz {
    pub fn new(start: PointSetId, end: PointSetId, creator: &FormatterCreator) -> Self {
        Self {
            start,
            end,
            offset: creator.settings().zone_offset,
        }
    }
}

impl DataConverter for TimestampToTimestampTz {
    fn name(&self) -> &'static str {
        "TimestampToTimestampTz"
    }

    fn start(&self) -> PointSetId {
        self.start
    }

    fn end(&self) -> PointSetId {
        self.end
    }

    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Timestamp(ts) => Ok(ts
                .and_local_timezone(self.offset)
                .single()
                .map(GridValue::TimestampTz)
                .unwrap_or(GridValue::Null)),
            other => Err(ConvertError::mismatch(
                self.name(),
                "timestamp",
                other.kind_name(),
            )),
        }
    }

    fn reverse_not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::TimestampTz(ts) => Ok(GridValue::Timestamp(
                ts.with_timezone(&self.offset).naive_local(),
            )),
            other => Err(ConvertError::mismatch(
                self.name(),
                "zoned timestamp",
                other.kind_name(),
            )),
        }
    }
}

/// timestamps <-> numbers as epoch milliseconds
pub struct TimestampToNumber {
    start: PointSetId,
    end: PointSetId,
}

impl TimestampToNumber {
    pub fn new(start: PointSetId, end: PointSetId) -> Self {
        Self { start, end }
    }
}

impl DataConverter for TimestampToNumber {
    fn name(&self) -> &'static str {
        "TimestampToNumber"
    }

    fn start(&self) -> PointSetId {
        self.start
    }

    fn end(&self) -> PointSetId {
        self.end
    }

    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Timestamp(ts) => {
                Ok(GridValue::Int(ts.and_utc().timestamp_millis()))
            }
            other => Err(ConvertError::mismatch(
                self.name(),
                "timestamp",
                other.kind_name(),
            )),
        }
    }

    fn reverse_not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        let millis = match value {
            GridValue::Int(i) => Some(*i),
            GridValue::Float(f) => Some(*f as i64),
            GridValue::Decimal(_) => value.as_f64().map(|f| f as i64),
            other => {
                return Err(ConvertError::mismatch(
                    self.name(),
                    "number",
                    other.kind_name(),
                ))
            }
        };
        Ok(millis
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| GridValue::Timestamp(dt.naive_utc()))
            .unwrap_or(GridValue::Null))
    }
}

/// timestamps <-> temporal accessors.
///
/// The accessor set holds the same instants behind the widened `Temporal`
/// shape, so both directions pass the value through unchanged after a shape
/// check.
pub struct TimestampToTemporal {
    start: PointSetId,
    end: PointSetId,
}

impl TimestampToTemporal {
    pub fn new(start: PointSetId, end: PointSetId) -> Self {
        Self { start, end }
    }

    fn passthrough(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Date(_)
            | GridValue::Time(_)
            | GridValue::Timestamp(_)
            | GridValue::TimestampTz(_) => Ok(value.clone()),
            other => Err(ConvertError::mismatch(
                self.name(),
                "temporal",
                other.kind_name(),
            )),
        }
    }
}

impl DataConverter for TimestampToTemporal {
    fn name(&self) -> &'static str {
        "TimestampToTemporal"
    }

    fn start(&self) -> PointSetId {
        self.start
    }

    fn end(&self) -> PointSetId {
        self.end
    }

    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        self.passthrough(value)
    }

    fn reverse_not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        self.passthrough(value)
    }
}
