/*!
# multi-password

Pluggable password hashing: one uniform `create`/`verify` interface in
front of interchangeable, independently registered algorithm strategies.

## Overview

The crate is a dispatch layer, not a cryptography library:

- A [`StrategyRegistry`] maps algorithm identifiers to strategy
  factories
- A [`Config`] supplies a default algorithm and default options
- A [`Manager`] resolves one identifier, instantiates the strategy once,
  and forwards calls with merged options

The built-in bcrypt, scrypt, and argon2 strategies delegate entirely to
their backend crates and are each gated behind a cargo feature
(`bcrypt` is on by default). Applications can register their own
strategies at startup and select them by identifier at runtime.

## Hashing with the defaults

```rust
use multi_password::Manager;

let manager = Manager::new(Some("bcrypt".into()), None);
let hash = manager.create("my_password").unwrap();

assert!(manager.verify("my_password", &hash).unwrap());
assert!(!manager.verify("wrong", &hash).unwrap());
```

## Registering a custom strategy

```rust
use multi_password::{Manager, Options, PasswordStrategy, Result, register};

struct Plain;

impl PasswordStrategy for Plain {
    fn create(&self, password: &str, _options: &Options) -> Result<String> {
        Ok(format!("plain${password}"))
    }

    fn verify(&self, password: &str, encoded_hash: &str) -> Result<bool> {
        Ok(encoded_hash == format!("plain${password}"))
    }
}

register("plain", || Box::new(Plain));

let manager = Manager::new(Some("plain".into()), None);
assert_eq!(manager.create("pw").unwrap(), "plain$pw");
```

## Configuring defaults

```rust
use multi_password::{Options, configure, reset_config};

configure(|config| {
    config.default_algorithm = Some("bcrypt".into());
    config.default_options = Options::new().with("cost", 4);
});

let hash = multi_password::create("my_password").unwrap();
assert!(multi_password::verify("my_password", &hash).unwrap());
# reset_config();
```
*/

pub mod config;
pub mod error;
pub mod manager;
pub mod options;
pub mod registry;
pub mod strategies;

// Re-export commonly used types for convenience
pub use config::{Config, ConfigStore, config, configure, reset_config};
pub use error::{Error, Result};
pub use manager::Manager;
pub use options::Options;
pub use registry::{
    AlgorithmId, DuplicateRegistration, StrategyFactory, StrategyRegistry, list_algorithms,
    register, reset_registrations, resolve, unregister,
};
pub use strategies::{PasswordStrategy, StrategyError};

/// Hash a password with the process-wide defaults
pub fn create(password: &str) -> Result<String> {
    Manager::new(None, None).create(password)
}

/// Check a password against an encoded hash with the process-wide defaults
pub fn verify(password: &str, encoded_hash: &str) -> Result<bool> {
    Manager::new(None, None).verify(password, encoded_hash)
}
