/*!
Default algorithm and option configuration.

A configuration supplies the defaults a manager falls back on: the
algorithm to use when none is given, and baseline options that explicit
per-manager options are merged over. A process-wide store backs the
module-level `configure`/`config`/`reset_config` functions; tests and
embedding applications can construct isolated stores.
*/

use std::sync::RwLock;

use once_cell::sync::Lazy;

use crate::options::Options;
use crate::registry::AlgorithmId;

/// Defaults read at manager construction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Algorithm used when a manager is built without an explicit one
    pub default_algorithm: Option<AlgorithmId>,

    /// Baseline options; explicit manager options win on key collision
    pub default_options: Options,
}

impl Config {
    /// Create a configuration with no default algorithm and empty options
    pub fn new() -> Self {
        Self::default()
    }
}

/// Mutable cell holding a [`Config`]
pub struct ConfigStore {
    inner: RwLock<Config>,
}

impl ConfigStore {
    /// Create a store holding the initial empty configuration
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Config::new()),
        }
    }

    /// Snapshot of the current configuration
    pub fn get(&self) -> Config {
        self.inner.read().unwrap().clone()
    }

    /// Apply a mutation to the current configuration in place
    pub fn update(&self, mutator: impl FnOnce(&mut Config)) {
        let mut config = self.inner.write().unwrap();
        mutator(&mut config);
    }

    /// Restore the initial empty configuration
    pub fn reset(&self) {
        *self.inner.write().unwrap() = Config::new();
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

// Global configuration store
static CONFIG: Lazy<ConfigStore> = Lazy::new(ConfigStore::new);

// Public API

/// Get the process-wide configuration store
pub fn global() -> &'static ConfigStore {
    &CONFIG
}

/// Mutate the process-wide configuration
pub fn configure(mutator: impl FnOnce(&mut Config)) {
    CONFIG.update(mutator);
}

/// Snapshot of the process-wide configuration
pub fn config() -> Config {
    CONFIG.get()
}

/// Reset the process-wide configuration to its initial empty state
pub fn reset_config() {
    CONFIG.reset();
}
