//! Minimal line-oriented `key=value` configuration store.
//!
//! This crate decodes a line-oriented text format into an in-memory string
//! map, supports programmatic mutation, and encodes the map back to the same
//! format deterministically. The format is one `key = value` pair per line;
//! blank lines and lines starting with `//` are skipped, and the first `=`
//! on a line separates key from value.

mod decode;
mod error;
mod shared;
mod store;

/// Public error types returned by decode, encode, and mutation APIs.
pub use error::{ConfigError, ValidationError};
/// Lock-guarded handle for sharing one store across threads.
pub use shared::SharedConfig;
/// The single-owner key/value store.
pub use store::Config;
