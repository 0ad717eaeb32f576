//! Formatter factory and the formatter products
//!
//! One `FormatterCreator` lives per grid session, wrapping the shared
//! `FormatsCache` and `FormatSettings`. Formatter construction resolves the
//! pattern once; converters therefore build their formatter in their own
//! constructor, not per converted value.

use crate::{FormatError, FormatKey, FormatResult, FormatSettings, FormatsCache};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

/// Factory for the per-kind formatters
#[derive(Debug, Clone)]
pub struct FormatterCreator {
    cache: Arc<FormatsCache>,
    settings: FormatSettings,
}

impl FormatterCreator {
    /// Create a factory over a shared cache and session settings
    pub fn new(cache: Arc<FormatsCache>, settings: FormatSettings) -> Self {
        Self { cache, settings }
    }

    /// Factory with default settings and a fresh cache
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(FormatsCache::new()), FormatSettings::default())
    }

    /// The session settings this factory hands out
    pub fn settings(&self) -> &FormatSettings {
        &self.settings
    }

    /// Date formatter bound to the session date pattern
    pub fn date_formatter(&self) -> DateFormatter {
        DateFormatter {
            pattern: self.cache.pattern(FormatKey::Date, &self.settings),
        }
    }

    /// Time formatter bound to the session time pattern
    pub fn time_formatter(&self) -> TimeFormatter {
        TimeFormatter {
            pattern: self.cache.pattern(FormatKey::Time, &self.settings),
        }
    }

    /// Naive timestamp formatter
    pub fn timestamp_formatter(&self) -> TimestampFormatter {
        TimestampFormatter {
            pattern: self.cache.pattern(FormatKey::Timestamp, &self.settings),
        }
    }

    /// Zoned timestamp formatter
    pub fn timestamp_tz_formatter(&self) -> TimestampTzFormatter {
        TimestampTzFormatter {
            pattern: self.cache.pattern(FormatKey::TimestampTz, &self.settings),
        }
    }

    /// Number formatter applying the session decimal separator
    pub fn number_formatter(&self) -> NumberFormatter {
        NumberFormatter {
            decimal_separator: self.settings.decimal_separator,
        }
    }
}

/// Formats and parses dates with one fixed pattern
#[derive(Debug, Clone)]
pub struct DateFormatter {
    pattern: Arc<str>,
}

impl DateFormatter {
    pub fn format(&self, value: NaiveDate) -> String {
        value.format(&self.pattern).to_string()
    }

    pub fn parse(&self, input: &str) -> FormatResult<NaiveDate> {
        NaiveDate::parse_from_str(input.trim(), &self.pattern)
            .map_err(|_| FormatError::parse(input, "date"))
    }
}

/// Formats and parses times of day
#[derive(Debug, Clone)]
pub struct TimeFormatter {
    pattern: Arc<str>,
}

impl TimeFormatter {
    pub fn format(&self, value: NaiveTime) -> String {
        value.format(&self.pattern).to_string()
    }

    pub fn parse(&self, input: &str) -> FormatResult<NaiveTime> {
        NaiveTime::parse_from_str(input.trim(), &self.pattern)
            .map_err(|_| FormatError::parse(input, "time"))
    }
}

/// Formats and parses naive timestamps
#[derive(Debug, Clone)]
pub struct TimestampFormatter {
    pattern: Arc<str>,
}

impl TimestampFormatter {
    pub fn format(&self, value: NaiveDateTime) -> String {
        value.format(&self.pattern).to_string()
    }

    pub fn parse(&self, input: &str) -> FormatResult<NaiveDateTime> {
        NaiveDateTime::parse_from_str(input.trim(), &self.pattern)
            .map_err(|_| FormatError::parse(input, "timestamp"))
    }
}

/// Formats and parses timestamps carrying a fixed offset
#[derive(Debug, Clone)]
pub struct TimestampTzFormatter {
    pattern: Arc<str>,
}

impl TimestampTzFormatter {
    pub fn format(&self, value: DateTime<FixedOffset>) -> String {
        value.format(&self.pattern).to_string()
    }

    pub fn parse(&self, input: &str) -> FormatResult<DateTime<FixedOffset>> {
        DateTime::parse_from_str(input.trim(), &self.pattern)
            .map_err(|_| FormatError::parse(input, "zoned timestamp"))
    }
}

/// Renders fractional numbers with the session decimal separator
#[derive(Debug, Clone)]
pub struct NumberFormatter {
    decimal_separator: char,
}

impl NumberFormatter {
    pub fn format_f64(&self, value: f64) -> String {
        self.localize(value.to_string())
    }

    pub fn format_decimal(&self, value: Decimal) -> String {
        self.localize(value.to_string())
    }

    /// Parse text as an exact decimal, tolerating the session separator
    pub fn parse_decimal(&self, input: &str) -> FormatResult<Decimal> {
        let normalized: String = input
            .trim()
            .chars()
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect();
        Decimal::from_str(&normalized).map_err(|_| FormatError::parse(input, "decimal"))
    }

    fn localize(&self, rendered: String) -> String {
        if self.decimal_separator == '.' {
            rendered
        } else {
            rendered.replace('.', &self.decimal_separator.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creator() -> FormatterCreator {
        FormatterCreator::with_defaults()
    }

    #[test]
    fn test_date_round_trip() {
        let fmt = creator().date_formatter();
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let text = fmt.format(date);
        assert_eq!(text, "2024-03-09");
        assert_eq!(fmt.parse(&text).unwrap(), date);
    }

    #[test]
    fn test_time_parse_failure() {
        let fmt = creator().time_formatter();
        assert!(fmt.parse("not a time").is_err());
    }

    #[test]
    fn test_timestamp_round_trip() {
        let fmt = creator().timestamp_formatter();
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(13, 30, 5)
            .unwrap();
        assert_eq!(fmt.parse(&fmt.format(ts)).unwrap(), ts);
    }

    #[test]
    fn test_zoned_timestamp_round_trip() {
        let fmt = creator().timestamp_tz_formatter();
        let offset = FixedOffset::east_opt(3600).unwrap();
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(13, 30, 5)
            .unwrap()
            .and_local_timezone(offset)
            .unwrap();
        assert_eq!(fmt.parse(&fmt.format(ts)).unwrap(), ts);
    }

    #[test]
    fn test_number_formatter_separator() {
        let settings = FormatSettings {
            decimal_separator: ',',
            ..FormatSettings::default()
        };
        let creator = FormatterCreator::new(Arc::new(FormatsCache::new()), settings);
        let fmt = creator.number_formatter();
        assert_eq!(fmt.format_f64(3.14), "3,14");
        assert_eq!(fmt.parse_decimal("3,14").unwrap(), Decimal::from_str("3.14").unwrap());
    }
}
