/*!
Dispatch manager.

A manager is a short-lived orchestrator: it is built for one algorithm
(explicit or the configured default), resolves that identifier against a
registry on first use, instantiates the strategy once, and forwards
`create`/`verify` calls to it with the options merged at construction.
*/

use once_cell::sync::OnceCell;

use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::registry::{self, AlgorithmId, StrategyRegistry};
use crate::strategies::PasswordStrategy;

/// Short-lived orchestrator forwarding hashing calls to one strategy.
///
/// The strategy instance is created lazily on the first `create` or
/// `verify` call and reused for the manager's lifetime; there is no
/// reset path, construct a new manager instead.
pub struct Manager<'r> {
    registry: &'r StrategyRegistry,
    algorithm: Option<AlgorithmId>,
    options: Options,
    strategy: OnceCell<Box<dyn PasswordStrategy>>,
}

impl Manager<'static> {
    /// Create a manager backed by the process-wide registry and
    /// configuration.
    ///
    /// When `algorithm` is `None`, the configured `default_algorithm` is
    /// used; when that is also unset, `create`/`verify` fail with
    /// [`Error::AlgorithmNotRegistered`]. Explicit options are merged
    /// over the configured `default_options`, explicit values winning on
    /// key collision.
    pub fn new(algorithm: Option<AlgorithmId>, options: Option<Options>) -> Self {
        Self::with_registry(registry::global(), &config::config(), algorithm, options)
    }
}

impl<'r> Manager<'r> {
    /// Create a manager against an explicit registry and configuration
    pub fn with_registry(
        registry: &'r StrategyRegistry,
        config: &Config,
        algorithm: Option<AlgorithmId>,
        options: Option<Options>,
    ) -> Self {
        let algorithm = algorithm.or_else(|| config.default_algorithm.clone());
        let options = options
            .unwrap_or_default()
            .merged_over(&config.default_options);

        Self {
            registry,
            algorithm,
            options,
            strategy: OnceCell::new(),
        }
    }

    /// The algorithm this manager dispatches to, if any was determined
    pub fn algorithm(&self) -> Option<&AlgorithmId> {
        self.algorithm.as_ref()
    }

    /// The merged options forwarded to the strategy's `create`
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Hash a password with the managed strategy.
    ///
    /// The strategy's result is returned unchanged.
    pub fn create(&self, password: &str) -> Result<String> {
        self.strategy()?.create(password, &self.options)
    }

    /// Check a password against an encoded hash with the managed strategy.
    ///
    /// The strategy's result is returned unchanged.
    pub fn verify(&self, password: &str, encoded_hash: &str) -> Result<bool> {
        self.strategy()?.verify(password, encoded_hash)
    }

    /// Resolve and instantiate the strategy, at most once per manager
    fn strategy(&self) -> Result<&dyn PasswordStrategy> {
        let strategy = self.strategy.get_or_try_init(|| {
            let id = self
                .algorithm
                .as_ref()
                .ok_or_else(|| Error::not_registered(None))?;
            let factory = self.registry.resolve(id)?;
            Ok(factory())
        })?;
        Ok(strategy.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct Counting;

    impl PasswordStrategy for Counting {
        fn create(&self, password: &str, options: &Options) -> Result<String> {
            let cost = options.get("cost").and_then(|v| v.as_u64()).unwrap_or(0);
            Ok(format!("counting${}${}", password, cost))
        }

        fn verify(&self, password: &str, encoded_hash: &str) -> Result<bool> {
            Ok(encoded_hash.starts_with(&format!("counting${}$", password)))
        }
    }

    fn counting_factory() -> Box<dyn PasswordStrategy> {
        Box::new(Counting)
    }

    fn registry_with_counting() -> StrategyRegistry {
        let registry = StrategyRegistry::new();
        registry.register("counting", counting_factory);
        registry
    }

    #[test]
    fn test_create_forwards_merged_options() {
        let registry = registry_with_counting();
        let config = Config::new();
        let manager = Manager::with_registry(
            &registry,
            &config,
            Some(AlgorithmId::from("counting")),
            Some(Options::new().with("cost", 12)),
        );

        assert_eq!(manager.create("password").unwrap(), "counting$password$12");
    }

    #[test]
    fn test_verify_forwards_result_unchanged() {
        let registry = registry_with_counting();
        let config = Config::new();
        let manager = Manager::with_registry(
            &registry,
            &config,
            Some(AlgorithmId::from("counting")),
            None,
        );

        assert!(manager.verify("password", "counting$password$12").unwrap());
        assert!(!manager.verify("other", "counting$password$12").unwrap());
    }

    #[test]
    fn test_explicit_options_win_over_defaults() {
        let registry = registry_with_counting();
        let config = Config {
            default_algorithm: None,
            default_options: Options::new().with("cost", 10),
        };
        let manager = Manager::with_registry(
            &registry,
            &config,
            Some(AlgorithmId::from("counting")),
            Some(Options::new().with("cost", 12)),
        );

        assert_eq!(manager.options().get("cost").unwrap(), 12);
        assert_eq!(manager.create("pw").unwrap(), "counting$pw$12");
    }

    #[test]
    fn test_configured_defaults_fill_gaps() {
        let registry = registry_with_counting();
        let config = Config {
            default_algorithm: Some(AlgorithmId::from("counting")),
            default_options: Options::new().with("cost", 10),
        };
        let manager = Manager::with_registry(&registry, &config, None, None);

        assert_eq!(manager.algorithm(), Some(&AlgorithmId::from("counting")));
        assert_eq!(manager.create("pw").unwrap(), "counting$pw$10");
    }

    #[test]
    fn test_no_algorithm_anywhere() {
        let registry = registry_with_counting();
        let config = Config::new();
        let manager = Manager::with_registry(&registry, &config, None, None);

        let err = manager.create("pw").unwrap_err();
        assert!(matches!(err, Error::AlgorithmNotRegistered { .. }));
        assert!(err.to_string().contains("(unspecified)"));

        let err = manager.verify("pw", "hash").unwrap_err();
        assert!(matches!(err, Error::AlgorithmNotRegistered { .. }));
    }

    #[test]
    fn test_unregistered_algorithm_fails_on_use() {
        let registry = StrategyRegistry::new();
        let config = Config::new();
        // construction itself does not resolve
        let manager =
            Manager::with_registry(&registry, &config, Some(AlgorithmId::from("dummy")), None);

        let err = manager.create("pw").unwrap_err();
        assert!(err.to_string().contains("dummy"));
    }

    #[test]
    fn test_strategy_is_instantiated_once() {
        // dedicated counter so parallel tests cannot disturb the count
        static INSTANTIATIONS: AtomicUsize = AtomicUsize::new(0);

        fn tracked_factory() -> Box<dyn PasswordStrategy> {
            INSTANTIATIONS.fetch_add(1, Ordering::SeqCst);
            Box::new(Counting)
        }

        let registry = StrategyRegistry::new();
        registry.register("tracked", tracked_factory);
        let config = Config::new();
        let manager =
            Manager::with_registry(&registry, &config, Some(AlgorithmId::from("tracked")), None);

        manager.create("pw").unwrap();
        manager.verify("pw", "counting$pw$0").unwrap();
        manager.create("pw").unwrap();
        assert_eq!(INSTANTIATIONS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_options_are_merged_at_construction() {
        use crate::config::ConfigStore;

        let registry = registry_with_counting();
        let store = ConfigStore::new();
        store.update(|config| config.default_options.insert("cost", 10));

        let manager = Manager::with_registry(
            &registry,
            &store.get(),
            Some(AlgorithmId::from("counting")),
            None,
        );

        // default changes after construction must not affect the manager
        store.update(|config| config.default_options.insert("cost", 99));
        assert_eq!(manager.create("pw").unwrap(), "counting$pw$10");
    }
}
