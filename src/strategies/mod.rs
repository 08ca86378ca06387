/*!
Password hashing strategies.

This module defines the capability contract every strategy satisfies and
hosts the built-in backends, each behind its own cargo feature. The core
never inspects what a strategy produces; an encoded hash is an opaque
string that only the strategy which produced it needs to understand.
*/

use thiserror::Error;

use crate::error::{Error as CoreError, Result};
use crate::options::Options;
use crate::registry::StrategyRegistry;

#[cfg(feature = "argon2")]
pub mod argon2;
#[cfg(feature = "bcrypt")]
pub mod bcrypt;
#[cfg(feature = "scrypt")]
pub mod scrypt;

/// Capability contract for a password hashing strategy
pub trait PasswordStrategy: Send + Sync {
    /// Hash a password into an encoded, self-describing string
    fn create(&self, password: &str, options: &Options) -> Result<String>;

    /// Check a password against a previously created encoded hash
    fn verify(&self, password: &str, encoded_hash: &str) -> Result<bool>;
}

/// Failures owned by the built-in strategies
#[derive(Error, Debug)]
pub enum StrategyError {
    /// An option value could not be interpreted
    #[error("invalid option '{key}': {reason}")]
    InvalidOption {
        /// The option key that was rejected
        key: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The hashing backend reported a failure
    #[error("{0}")]
    Backend(String),
}

/// Register every built-in strategy compiled into this build
#[cfg_attr(
    not(any(feature = "bcrypt", feature = "scrypt", feature = "argon2")),
    allow(unused_variables)
)]
pub fn register_builtins(registry: &StrategyRegistry) {
    #[cfg(feature = "bcrypt")]
    registry.register("bcrypt", || Box::new(bcrypt::Bcrypt));

    #[cfg(feature = "scrypt")]
    registry.register("scrypt", || Box::new(scrypt::Scrypt));

    #[cfg(feature = "argon2")]
    registry.register("argon2", || Box::new(argon2::Argon2));
}

/// Read an integer option, erroring on non-integer values
#[cfg_attr(
    not(any(feature = "bcrypt", feature = "scrypt", feature = "argon2")),
    allow(dead_code)
)]
pub(crate) fn u32_option(options: &Options, key: &str) -> Result<Option<u32>> {
    match options.get(key) {
        None => Ok(None),
        Some(value) => {
            let n = value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| {
                    CoreError::strategy(StrategyError::InvalidOption {
                        key: key.to_string(),
                        reason: format!("expected an unsigned integer, got {}", value),
                    })
                })?;
            Ok(Some(n))
        }
    }
}

/// Wrap a backend failure for transparent propagation
#[cfg_attr(
    not(any(feature = "bcrypt", feature = "scrypt", feature = "argon2")),
    allow(dead_code)
)]
pub(crate) fn backend_err(err: impl std::fmt::Display) -> CoreError {
    CoreError::strategy(StrategyError::Backend(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_option_absent() {
        assert_eq!(u32_option(&Options::new(), "cost").unwrap(), None);
    }

    #[test]
    fn test_u32_option_present() {
        let options = Options::new().with("cost", 12);
        assert_eq!(u32_option(&options, "cost").unwrap(), Some(12));
    }

    #[test]
    fn test_u32_option_rejects_non_integer() {
        let options = Options::new().with("cost", "high");
        let err = u32_option(&options, "cost").unwrap_err();
        assert!(err.to_string().contains("invalid option 'cost'"));
    }

    #[test]
    fn test_u32_option_rejects_out_of_range() {
        let options = Options::new().with("cost", u64::MAX);
        assert!(u32_option(&options, "cost").is_err());
    }
}
