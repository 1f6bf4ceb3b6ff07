//! Decoding from text streams and the convenience constructors.


use crate::error::ConfigError;
use crate::store::{COMMENT_PREFIX, Config, DELIM};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

impl Config {
    /// Decode a store from a line-oriented `key=value` reader.
    ///
    /// Lines that are empty after trimming, or that start with `//`, are
    /// skipped. The first `=` on a line separates key from value; later `=`
    /// characters belong to the value. Line numbers in errors are 1-based.
    /// Duplicate detection covers this decode pass only. On any failure the
    /// error alone is returned; no partially decoded store escapes.
    pub fn decode(reader: impl BufRead) -> Result<Self, ConfigError> {
        let mut cfg = Config::new();
        for (index, line) in reader.lines().enumerate() {
            let line_num = index + 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }
            let (key, value) = match line.split_once(DELIM) {
                Some((key, value)) => (key.trim(), value.trim()),
                None => return Err(ConfigError::NoPair { line: line_num }),
            };
            if key.is_empty() || value.is_empty() {
                return Err(ConfigError::NoPair { line: line_num });
            }
            if cfg.contains(key) {
                return Err(ConfigError::DuplicateKey {
                    key: key.to_string(),
                    line: line_num,
                });
            }
            cfg.insert_raw(key.to_string(), value.to_string());
        }
        debug!("decoded config (pairs={})", cfg.len());
        Ok(cfg)
    }

    /// Decode, then verify that every key in `required` is present.
    ///
    /// The check runs only after a fully successful line-level parse, and
    /// the error carries every absent key in the caller's order, not just
    /// the first one found.
    pub fn decode_required(reader: impl BufRead, required: &[&str]) -> Result<Self, ConfigError> {
        let cfg = Self::decode(reader)?;
        match cfg.missing(required) {
            Some(keys) => {
                warn!("decoded config lacks required keys (keys={keys:?})");
                Err(ConfigError::MissingRequired { keys })
            }
            None => Ok(cfg),
        }
    }

    /// Open the file at `path` and decode it.
    ///
    /// The file handle is dropped on every exit path: success, parse error,
    /// or missing file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("opening config file (path={})", path.display());
        let file = File::open(path)?;
        Self::decode(BufReader::new(file))
    }

    /// Open the file at `path`, decode it, and verify required keys.
    pub fn open_required(
        path: impl AsRef<Path>,
        required: &[&str],
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("opening config file (path={})", path.display());
        let file = File::open(path)?;
        Self::decode_required(BufReader::new(file), required)
    }

    /// Decode, then fill in defaults for keys the source did not set.
    ///
    /// A default never overrides a value present in the source text. A
    /// default pair that fails validation propagates as
    /// [`ConfigError::Validation`].
    pub fn decode_with_defaults(
        reader: impl BufRead,
        defaults: &[(&str, &str)],
    ) -> Result<Self, ConfigError> {
        let mut cfg = Self::decode(reader)?;
        for (key, value) in defaults {
            if cfg.get(key).is_empty() {
                cfg.set(*key, *value)?;
            }
        }
        Ok(cfg)
    }

    /// Build a store from the named process environment variables.
    ///
    /// Each name is rendered as a `NAME = value` line (empty when the
    /// variable is unset) and the buffer is fed back through
    /// [`Config::decode`], so a listed name whose environment value is
    /// empty or unset fails the decode with a no-pair error.
    pub fn from_env(names: &[&str]) -> Result<Self, ConfigError> {
        let mut buf = String::new();
        for name in names {
            let value = std::env::var(name).unwrap_or_default();
            buf.push_str(name);
            buf.push_str(" = ");
            buf.push_str(&value);
            buf.push('\n');
        }
        Self::decode(buf.as_bytes())
    }
}
