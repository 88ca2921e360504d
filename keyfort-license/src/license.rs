//! The frozen license container applications read after verification.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};

use crate::error::ValueParseError;
use crate::{DATE_FORMAT, EXPIRATION_DATE_KEY};

/// A verified, read-only license.
///
/// Construction takes ownership of the mapping, so no other code can alias
/// or mutate the entries afterwards; there is no mutation API. A `License`
/// is therefore safe to share across threads for concurrent reads.
///
/// The typed getters return the caller-supplied default when the key is
/// absent or its value is empty. A present, non-empty value that does not
/// parse is a [`ValueParseError`] — bad data from the issuer, surfaced
/// immediately instead of being masked by the default.
#[derive(Debug, Clone)]
pub struct License {
    entries: BTreeMap<String, String>,
}

impl License {
    /// Creates a license from a fully-populated mapping.
    #[must_use]
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Returns the value for the given key.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Checks whether a feature flag is active.
    ///
    /// Absent keys, empty values, and anything that does not spell `true`
    /// (case-insensitive) count as inactive. This predicate never fails.
    #[must_use]
    pub fn is_feature_active(&self, key: &str) -> bool {
        match self.value(key) {
            Some(value) => value.eq_ignore_ascii_case("true"),
            None => false,
        }
    }

    /// Returns the value as an `i8`, or `default` when absent or empty.
    pub fn value_as_i8(&self, key: &str, default: i8) -> Result<i8, ValueParseError> {
        self.parse_value(key, default, "i8")
    }

    /// Returns the value as an `i16`, or `default` when absent or empty.
    pub fn value_as_i16(&self, key: &str, default: i16) -> Result<i16, ValueParseError> {
        self.parse_value(key, default, "i16")
    }

    /// Returns the value as an `i32`, or `default` when absent or empty.
    pub fn value_as_i32(&self, key: &str, default: i32) -> Result<i32, ValueParseError> {
        self.parse_value(key, default, "i32")
    }

    /// Returns the value as an `i64`, or `default` when absent or empty.
    pub fn value_as_i64(&self, key: &str, default: i64) -> Result<i64, ValueParseError> {
        self.parse_value(key, default, "i64")
    }

    /// Returns the value as an `f32`, or `default` when absent or empty.
    pub fn value_as_f32(&self, key: &str, default: f32) -> Result<f32, ValueParseError> {
        self.parse_value(key, default, "f32")
    }

    /// Returns the value as an `f64`, or `default` when absent or empty.
    pub fn value_as_f64(&self, key: &str, default: f64) -> Result<f64, ValueParseError> {
        self.parse_value(key, default, "f64")
    }

    /// Returns the value as a `bool`, or `default` when absent or empty.
    ///
    /// Unlike [`is_feature_active`](License::is_feature_active), parsing is
    /// strict: only `"true"` and `"false"` are accepted.
    pub fn value_as_bool(&self, key: &str, default: bool) -> Result<bool, ValueParseError> {
        self.parse_value(key, default, "bool")
    }

    /// Returns the first character of the value, or `default` when absent
    /// or empty.
    pub fn value_as_char(&self, key: &str, default: char) -> Result<char, ValueParseError> {
        match self.value(key).and_then(|value| value.chars().next()) {
            Some(first) => Ok(first),
            None => Ok(default),
        }
    }

    /// Returns the value parsed as a `yyyy-MM-dd` date, or `default` when
    /// absent or empty.
    pub fn value_as_date(
        &self,
        key: &str,
        default: Option<NaiveDate>,
    ) -> Result<Option<NaiveDate>, ValueParseError> {
        match self.value(key) {
            Some(value) if !value.is_empty() => {
                NaiveDate::parse_from_str(value, DATE_FORMAT)
                    .map(Some)
                    .map_err(|e| ValueParseError::new(key, value, "date", Some(Box::new(e))))
            }
            _ => Ok(default),
        }
    }

    /// Checks whether the license is expired.
    ///
    /// A license without an expiration entry never expires. The comparison
    /// is date-only on both sides (UTC), so the result does not depend on
    /// the time of day or the local timezone: a license expiring today is
    /// still valid for the rest of the day.
    pub fn is_expired(&self) -> Result<bool, ValueParseError> {
        match self.value_as_date(EXPIRATION_DATE_KEY, None)? {
            Some(expiration) => Ok(Utc::now().date_naive() > expiration),
            None => Ok(false),
        }
    }

    fn parse_value<T>(
        &self,
        key: &str,
        default: T,
        expected: &'static str,
    ) -> Result<T, ValueParseError>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        match self.value(key) {
            Some(value) if !value.is_empty() => value.parse().map_err(|e: T::Err| {
                ValueParseError::new(key, value, expected, Some(Box::new(e)))
            }),
            _ => Ok(default),
        }
    }
}
