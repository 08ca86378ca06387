/*!
Registry of password hashing strategies.

This module provides a registry mapping algorithm identifiers to
strategy factories, enabling runtime selection of hashing backends. A
process-wide instance backs the module-level convenience functions;
embedding applications and tests can construct isolated registries
instead.
*/

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::strategies::PasswordStrategy;

/// Symbolic identifier for a registered strategy
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlgorithmId(Cow<'static, str>);

impl AlgorithmId {
    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The conventional module path a strategy for this identifier is
    /// expected to live at, used in resolution error hints
    pub fn strategy_path(&self) -> String {
        format!("multi_password::strategies::{}", self.0)
    }
}

impl From<&'static str> for AlgorithmId {
    fn from(id: &'static str) -> Self {
        AlgorithmId(Cow::Borrowed(id))
    }
}

impl From<String> for AlgorithmId {
    fn from(id: String) -> Self {
        AlgorithmId(Cow::Owned(id))
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Factory producing a fresh strategy instance.
///
/// Factories take no arguments; per-call options go to the strategy's
/// `create`, never to its constructor.
pub type StrategyFactory = fn() -> Box<dyn PasswordStrategy>;

/// Diagnostic event emitted when a registration replaces an existing one.
///
/// Replacement is a successful operation, but silent replacement can mask
/// configuration mistakes, so the event is handed back to the caller
/// rather than written to an ambient stream. The module-level `register`
/// logs it at warn level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRegistration {
    /// The identifier whose strategy was replaced
    pub algorithm: AlgorithmId,
}

impl fmt::Display for DuplicateRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "algorithm '{}' was already registered; replacing the existing strategy",
            self.algorithm
        )
    }
}

/// Registry of password hashing strategies
pub struct StrategyRegistry {
    strategies: RwLock<HashMap<AlgorithmId, StrategyFactory>>,
}

impl StrategyRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            strategies: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry with the built-in strategies registered
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        crate::strategies::register_builtins(&registry);
        registry
    }

    /// Register a strategy factory under an identifier.
    ///
    /// Inserting over an existing registration still succeeds; the
    /// returned event signals the replacement so callers can surface it.
    pub fn register(
        &self,
        id: impl Into<AlgorithmId>,
        factory: StrategyFactory,
    ) -> Option<DuplicateRegistration> {
        let id = id.into();
        let mut strategies = self.strategies.write().unwrap();
        strategies
            .insert(id.clone(), factory)
            .map(|_| DuplicateRegistration { algorithm: id })
    }

    /// Remove a registration; a no-op when the identifier is absent
    pub fn unregister(&self, id: &AlgorithmId) {
        let mut strategies = self.strategies.write().unwrap();
        strategies.remove(id);
    }

    /// Look up the factory registered under an identifier
    pub fn resolve(&self, id: &AlgorithmId) -> Result<StrategyFactory> {
        let strategies = self.strategies.read().unwrap();
        strategies
            .get(id)
            .copied()
            .ok_or_else(|| Error::not_registered(Some(id)))
    }

    /// Whether a strategy is registered under an identifier
    pub fn contains(&self, id: &AlgorithmId) -> bool {
        self.strategies.read().unwrap().contains_key(id)
    }

    /// Clear every registration (test isolation)
    pub fn reset(&self) {
        self.strategies.write().unwrap().clear();
    }

    /// List all registered identifiers, sorted
    pub fn list(&self) -> Vec<AlgorithmId> {
        let strategies = self.strategies.read().unwrap();
        let mut ids: Vec<_> = strategies.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Global registry instance
static REGISTRY: Lazy<StrategyRegistry> = Lazy::new(StrategyRegistry::with_defaults);

// Public API

/// Get the process-wide registry
pub fn global() -> &'static StrategyRegistry {
    &REGISTRY
}

/// Register a strategy factory in the process-wide registry.
///
/// Replacing an existing registration logs a warning.
pub fn register(id: impl Into<AlgorithmId>, factory: StrategyFactory) {
    if let Some(duplicate) = REGISTRY.register(id, factory) {
        log::warn!("{}", duplicate);
    }
}

/// Remove a registration from the process-wide registry
pub fn unregister(id: &AlgorithmId) {
    REGISTRY.unregister(id);
}

/// Look up a factory in the process-wide registry
pub fn resolve(id: &AlgorithmId) -> Result<StrategyFactory> {
    REGISTRY.resolve(id)
}

/// Clear every registration in the process-wide registry
pub fn reset_registrations() {
    REGISTRY.reset();
}

/// List all identifiers registered in the process-wide registry
pub fn list_algorithms() -> Vec<AlgorithmId> {
    REGISTRY.list()
}
