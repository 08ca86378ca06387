/*!
Error handling for the password dispatch layer.

The core owns exactly one failure kind: an algorithm identifier that no
strategy is registered under. Every other failure originates inside a
strategy and passes through unchanged.
*/

use thiserror::Error;

use crate::registry::AlgorithmId;

/// Result type for the password dispatch layer
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the password dispatch layer
#[derive(Error, Debug)]
pub enum Error {
    /// No strategy is registered under the requested algorithm identifier
    #[error("algorithm '{algorithm}' is not registered; {hint}")]
    AlgorithmNotRegistered {
        /// The identifier that failed to resolve, or "(unspecified)"
        algorithm: String,
        /// Where the caller should look for the missing strategy
        hint: String,
    },

    /// Failure raised by a strategy implementation, passed through unchanged
    #[error(transparent)]
    Strategy(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    /// Build an `AlgorithmNotRegistered` error for the given identifier.
    ///
    /// `None` means neither an explicit algorithm nor a configured default
    /// was available when resolution was attempted.
    pub(crate) fn not_registered(algorithm: Option<&AlgorithmId>) -> Self {
        match algorithm {
            Some(id) => Error::AlgorithmNotRegistered {
                algorithm: id.to_string(),
                hint: format!(
                    "try enabling the matching cargo feature or registering a strategy at '{}'",
                    id.strategy_path()
                ),
            },
            None => Error::AlgorithmNotRegistered {
                algorithm: "(unspecified)".to_string(),
                hint: "pass an algorithm explicitly or set `default_algorithm` in the config"
                    .to_string(),
            },
        }
    }

    /// Wrap a strategy-owned failure for transparent propagation
    pub fn strategy<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Strategy(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_registered_names_identifier_and_path() {
        let id = AlgorithmId::from("dummy");
        let err = Error::not_registered(Some(&id));
        let msg = err.to_string();
        assert!(msg.contains("dummy"));
        assert!(msg.contains("multi_password::strategies::dummy"));
    }

    #[test]
    fn test_not_registered_without_identifier() {
        let err = Error::not_registered(None);
        let msg = err.to_string();
        assert!(msg.contains("(unspecified)"));
        assert!(msg.contains("default_algorithm"));
    }

    #[test]
    fn test_strategy_error_passes_through_unchanged() {
        let inner = std::io::Error::new(std::io::ErrorKind::InvalidData, "backend exploded");
        let err = Error::strategy(inner);
        assert_eq!(err.to_string(), "backend exploded");
    }
}
