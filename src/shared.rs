//! Lock-guarded mode for sharing one store across concurrent callers.

use crate::error::{ConfigError, ValidationError};
use crate::store::Config;
use parking_lot::RwLock;
use std::io::Write;
use std::sync::Arc;

/// A cloneable handle to one lock-guarded [`Config`].
///
/// This is the shared mode: every clone points at the same underlying
/// store, readers take a read lock, and mutations take a write lock, so a
/// `set` through any handle is visible to all holders. Single-threaded
/// callers should use plain [`Config`] and skip the locking entirely; the
/// two modes are separate types and cannot be mixed by accident.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<Config>>,
}

impl SharedConfig {
    /// Wrap an existing store for shared access.
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Value for `key`, or `""` when absent, cloned out under a read lock.
    pub fn get(&self, key: &str) -> String {
        self.inner.read().get(key).to_string()
    }

    /// Validate and insert a pair under the write lock.
    pub fn set(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.inner.write().set(key, value)
    }

    /// Remove a pair under the write lock; a no-op when absent.
    pub fn delete(&self, key: &str) {
        self.inner.write().delete(key);
    }

    /// Serialize under a read lock held for the whole dump.
    ///
    /// The lock spans sorting and writing, so the emitted snapshot is
    /// consistent even with writers queued behind it.
    pub fn encode(&self, writer: impl Write) -> Result<(), ConfigError> {
        self.inner.read().encode(writer)
    }

    /// Keys from `required` currently absent, under a read lock.
    pub fn missing(&self, required: &[&str]) -> Option<Vec<String>> {
        self.inner.read().missing(required)
    }

    /// Clone the current contents out as a single-owner [`Config`].
    pub fn snapshot(&self) -> Config {
        self.inner.read().clone()
    }
}

impl From<Config> for SharedConfig {
    fn from(config: Config) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mutations_are_visible_through_clones() {
        let shared = SharedConfig::default();
        let other = shared.clone();
        shared.set("key", "value").expect("set");
        assert_eq!(other.get("key"), "value");
        other.delete("key");
        assert_eq!(shared.get("key"), "");
    }

    #[test]
    fn snapshot_matches_locked_encode() {
        let shared = SharedConfig::default();
        shared.set("b", "2").expect("set");
        shared.set("a", "1").expect("set");

        let mut live = Vec::new();
        shared.encode(&mut live).expect("encode");
        let mut copied = Vec::new();
        shared.snapshot().encode(&mut copied).expect("encode");
        assert_eq!(live, copied);
        assert_eq!(String::from_utf8(live).expect("utf8"), "a=1\nb=2\n");
    }

    #[test]
    fn concurrent_writers_land_all_pairs() {
        let shared = SharedConfig::default();
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    shared.set(format!("key{n}"), format!("{n}")).expect("set");
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("join");
        }
        assert_eq!(shared.snapshot().len(), 8);
        assert_eq!(shared.missing(&["key0", "key7"]), None);
    }

    #[test]
    fn missing_reads_through_the_lock() {
        let shared = SharedConfig::new(Config::new());
        shared.set("a", "1").expect("set");
        assert_eq!(shared.missing(&["a", "b"]), Some(vec!["b".to_string()]));
    }
}
