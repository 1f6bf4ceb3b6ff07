//! Error types for decoding, encoding, and mutating a config store.

use thiserror::Error;

/// Errors returned when a key/value pair fails [`Config::set`] validation.
///
/// [`Config::set`]: crate::Config::set
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The key was empty.
    #[error("key cannot be empty")]
    EmptyKey,
    /// The value was empty.
    #[error("value cannot be empty")]
    EmptyValue,
    /// The key contained the `=` delimiter.
    #[error("key cannot contain '='")]
    KeyContainsDelimiter,
    /// The value contained a newline.
    #[error("value cannot contain newlines")]
    ValueContainsNewline,
    /// The key contained a newline.
    #[error("key cannot contain newlines")]
    KeyContainsNewline,
}

/// Errors returned while decoding, encoding, or building a config store.
///
/// Each variant carries structured fields (line number, key name, missing
/// key list) so callers can branch on the kind programmatically instead of
/// matching on message text.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A key/value pair failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A non-comment line held no usable key/value pair.
    #[error("no key/value pair found at line {line}")]
    NoPair {
        /// 1-based line number of the offending line.
        line: usize,
    },
    /// The same key appeared twice within one decode pass.
    #[error("duplicate entry for key {key} at line {line}")]
    DuplicateKey {
        /// The key that was repeated.
        key: String,
        /// 1-based line number of the second occurrence.
        line: usize,
    },
    /// Required keys were absent after an otherwise successful decode.
    #[error("missing required keys: {}", keys.join(", "))]
    MissingRequired {
        /// Every absent required key, in the caller's order.
        keys: Vec<String>,
    },
    /// Reading the underlying stream or file failed.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// Writing a rendered line to the sink failed.
    #[error("unable to encode line: {line}: {source}")]
    Encode {
        /// The `key=value` line that could not be written.
        line: String,
        /// The underlying write failure.
        source: std::io::Error,
    },
}
