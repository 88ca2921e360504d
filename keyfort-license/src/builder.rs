//! The writable license container used when issuing a license.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{DATE_FORMAT, EXPIRATION_DATE_KEY};

/// A license under construction.
///
/// Entries are a flat string key/value store; the typed setters format their
/// value into its canonical string form and delegate to [`set_value`]. Once
/// every entitlement is set, the builder is serialized, signed, and packed by
/// [`create_archive`](crate::create_archive). Applications never read
/// entitlements from this type; they read the frozen
/// [`License`](crate::License) that verification produces.
///
/// [`set_value`]: LicenseBuilder::set_value
#[derive(Debug, Clone, Default)]
pub struct LicenseBuilder {
    entries: BTreeMap<String, String>,
}

impl LicenseBuilder {
    /// Creates an empty license.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for the given key, replacing any previous value.
    pub fn set_value(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    /// Sets an `i8` value.
    pub fn set_i8(&mut self, key: &str, value: i8) {
        self.set_value(key, &value.to_string());
    }

    /// Sets an `i16` value.
    pub fn set_i16(&mut self, key: &str, value: i16) {
        self.set_value(key, &value.to_string());
    }

    /// Sets an `i32` value.
    pub fn set_i32(&mut self, key: &str, value: i32) {
        self.set_value(key, &value.to_string());
    }

    /// Sets an `i64` value.
    pub fn set_i64(&mut self, key: &str, value: i64) {
        self.set_value(key, &value.to_string());
    }

    /// Sets an `f32` value.
    pub fn set_f32(&mut self, key: &str, value: f32) {
        self.set_value(key, &value.to_string());
    }

    /// Sets an `f64` value.
    pub fn set_f64(&mut self, key: &str, value: f64) {
        self.set_value(key, &value.to_string());
    }

    /// Sets a boolean value (`"true"` or `"false"`).
    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set_value(key, &value.to_string());
    }

    /// Sets a single-character value.
    pub fn set_char(&mut self, key: &str, value: char) {
        self.set_value(key, &value.to_string());
    }

    /// Sets a date value in the canonical `yyyy-MM-dd` form.
    ///
    /// `None` removes the key.
    pub fn set_date(&mut self, key: &str, value: Option<NaiveDate>) {
        match value {
            Some(date) => self.set_value(key, &date.format(DATE_FORMAT).to_string()),
            None => {
                self.entries.remove(key);
            }
        }
    }

    /// Sets the expiration date of the license.
    pub fn set_expiration_date(&mut self, date: Option<NaiveDate>) {
        self.set_date(EXPIRATION_DATE_KEY, date);
    }

    /// Returns the value currently set for the given key.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Serializes the entries into the canonical content bytes that get
    /// signed: a flat JSON object with sorted keys.
    ///
    /// Signing and verification both operate on exactly these bytes; they
    /// are never re-derived or re-encoded in between.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.entries)
    }
}
