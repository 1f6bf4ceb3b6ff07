//! The in-memory key/value store and its mutation/serialization API.

use crate::error::{ConfigError, ValidationError};
use std::collections::HashMap;
use std::io::Write;

/// Delimiter separating key from value on a rendered line.
pub(crate) const DELIM: char = '=';
/// Prefix marking a line as a comment.
pub(crate) const COMMENT_PREFIX: &str = "//";

/// An in-memory key/value configuration store.
///
/// `Config` is the single-owner mode: mutation goes through `&mut self`, so
/// exclusive access is enforced by the borrow checker and no lock is taken.
/// To share one store across threads, wrap it in a
/// [`SharedConfig`](crate::SharedConfig).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    vals: HashMap<String, String>,
}

impl Config {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, or `""` when the key is absent.
    ///
    /// There is no error path: [`set`](Config::set) rejects empty values,
    /// so an empty return always means "absent".
    pub fn get(&self, key: &str) -> &str {
        self.vals.get(key).map(String::as_str).unwrap_or("")
    }

    /// Insert or overwrite a key/value pair after validating both parts.
    ///
    /// Keys are invalid if they are empty or contain `=` or newline
    /// characters; values are invalid if they are empty or contain newline
    /// characters. A failed call leaves the store untouched. The returned
    /// error can be safely ignored when both parts are already known valid.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let key = key.into();
        let value = value.into();
        if key.is_empty() {
            return Err(ValidationError::EmptyKey);
        }
        if value.is_empty() {
            return Err(ValidationError::EmptyValue);
        }
        if key.contains(DELIM) {
            return Err(ValidationError::KeyContainsDelimiter);
        }
        if value.contains('\n') {
            return Err(ValidationError::ValueContainsNewline);
        }
        // An unchecked newline in a key would corrupt line-based encode
        // output, so this check is not optional.
        if key.contains('\n') {
            return Err(ValidationError::KeyContainsNewline);
        }
        self.vals.insert(key, value);
        Ok(())
    }

    /// Remove a key/value pair; a no-op when the key is absent.
    pub fn delete(&mut self, key: &str) {
        self.vals.remove(key);
    }

    /// Serialize every pair to `writer`, one `key=value` line at a time.
    ///
    /// Lines are emitted in ascending lexicographic order of the full
    /// rendered `key=value` string (not the key alone), so the output is a
    /// deterministic, diff-friendly function of the store contents. A write
    /// failure stops immediately and reports the line that could not be
    /// written alongside the underlying cause.
    pub fn encode(&self, mut writer: impl Write) -> Result<(), ConfigError> {
        let mut lines: Vec<String> = self
            .vals
            .iter()
            .map(|(key, value)| format!("{key}{DELIM}{value}"))
            .collect();
        lines.sort_unstable();
        for line in lines {
            if let Err(source) = writeln!(writer, "{line}") {
                return Err(ConfigError::Encode { line, source });
            }
        }
        Ok(())
    }

    /// Keys from `required` that are absent, preserving the caller's order.
    ///
    /// Returns `None` when every required key is present, keeping "checked,
    /// none missing" distinguishable from an empty result list.
    pub fn missing(&self, required: &[&str]) -> Option<Vec<String>> {
        let missing: Vec<String> = required
            .iter()
            .filter(|key| self.get(key).is_empty())
            .map(|key| key.to_string())
            .collect();
        if missing.is_empty() { None } else { Some(missing) }
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.vals.len()
    }

    /// Whether the store holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    /// Iterate over the stored pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vals.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Record a pair during decode; the line split already guarantees the
    /// parts are non-empty and free of `=`-in-key and newlines.
    pub(crate) fn insert_raw(&mut self, key: String, value: String) {
        self.vals.insert(key, value);
    }

    /// Whether `key` is present.
    pub(crate) fn contains(&self, key: &str) -> bool {
        self.vals.contains_key(key)
    }
}
