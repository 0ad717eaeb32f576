//! Session-wide formatting settings

use chrono::{FixedOffset, NaiveDate};

/// Formatting configuration shared by every formatter of one grid session.
///
/// Built once at session start; formatters capture what they need at
/// construction time, so changing settings afterwards has no effect on
/// already-built formatters.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatSettings {
    /// Offset applied when lifting naive timestamps into zoned ones
    pub zone_offset: FixedOffset,
    /// Date component used to lift a time-only value into a full timestamp
    pub anchor_date: NaiveDate,
    /// chrono pattern for dates
    pub date_pattern: &'static str,
    /// chrono pattern for times
    pub time_pattern: &'static str,
    /// chrono pattern for naive timestamps
    pub timestamp_pattern: &'static str,
    /// chrono pattern for zoned timestamps
    pub timestamp_tz_pattern: &'static str,
    /// Decimal separator for rendered fractional numbers
    pub decimal_separator: char,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            zone_offset: FixedOffset::east_opt(0).expect("zero offset is valid"),
            anchor_date: NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch date is valid"),
            date_pattern: "%Y-%m-%d",
            time_pattern: "%H:%M:%S%.f",
            timestamp_pattern: "%Y-%m-%d %H:%M:%S%.f",
            timestamp_tz_pattern: "%Y-%m-%d %H:%M:%S%.f %:z",
            decimal_separator: '.',
        }
    }
}

impl FormatSettings {
    /// Settings with a specific zone offset, defaults otherwise
    pub fn with_zone_offset(offset: FixedOffset) -> Self {
        Self {
            zone_offset: offset,
            ..Self::default()
        }
    }
}
