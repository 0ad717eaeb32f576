//! Memoized formatting patterns

use crate::FormatSettings;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Kind of pattern a formatter asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKey {
    Date,
    Time,
    Timestamp,
    TimestampTz,
}

/// Cache of resolved pattern strings.
///
/// Pattern resolution is cheap today, but formatters are built per converter
/// and share one cache per session, so repeated lookups hand out the same
/// `Arc<str>`.
#[derive(Debug, Default)]
pub struct FormatsCache {
    patterns: RwLock<HashMap<FormatKey, Arc<str>>>,
}

impl FormatsCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Pattern for the given key, resolved from settings on first use
    pub fn pattern(&self, key: FormatKey, settings: &FormatSettings) -> Arc<str> {
        if let Some(found) = self.patterns.read().get(&key) {
            return Arc::clone(found);
        }
        let resolved: Arc<str> = Arc::from(match key {
            FormatKey::Date => settings.date_pattern,
            FormatKey::Time => settings.time_pattern,
            FormatKey::Timestamp => settings.timestamp_pattern,
            FormatKey::TimestampTz => settings.timestamp_tz_pattern,
        });
        self.patterns
            .write()
            .entry(key)
            .or_insert_with(|| Arc::clone(&resolved));
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_is_memoized() {
        let cache = FormatsCache::new();
        let settings = FormatSettings::default();
        let a = cache.pattern(FormatKey::Date, &settings);
        let b = cache.pattern(FormatKey::Date, &settings);
        assert_eq!(a, b);
        assert_eq!(&*a, "%Y-%m-%d");
    }
}
