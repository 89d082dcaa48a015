//! Thread-safe configuration storage.
//!
//! Provides a simple in-memory config container with interior mutability.

use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
///
/// Allows multiple readers to access config concurrently while
/// supporting atomic updates when needed.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Apply an in-place change, e.g. a command-line override.
    pub fn update(&self, apply: impl FnOnce(&mut Config)) {
        let mut guard = self.inner.write();
        apply(&mut *guard);
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
