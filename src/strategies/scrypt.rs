/*!
scrypt strategy, producing PHC-format strings.

Options:
- `log_n` - CPU/memory cost exponent, default 17
- `r` - block size, default 8
- `p` - parallelism, default 1
- `key_len` - derived key length in bytes, default 32
*/

use password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};
use scrypt::Params as ScryptParams;
use scrypt::Scrypt as ScryptKdf;

use super::{PasswordStrategy, StrategyError, backend_err, u32_option};
use crate::error::{Error, Result};
use crate::options::Options;

const DEFAULT_KEY_LEN: u32 = 32;

/// Strategy backed by the `scrypt` crate
pub struct Scrypt;

impl Scrypt {
    fn params(options: &Options) -> Result<ScryptParams> {
        let recommended = ScryptParams::recommended();
        let log_n = match u32_option(options, "log_n")? {
            Some(n) => u8::try_from(n).map_err(|_| {
                Error::strategy(StrategyError::InvalidOption {
                    key: "log_n".to_string(),
                    reason: format!("{} does not fit in a u8", n),
                })
            })?,
            None => recommended.log_n(),
        };
        let r = u32_option(options, "r")?.unwrap_or(recommended.r());
        let p = u32_option(options, "p")?.unwrap_or(recommended.p());
        let key_len = u32_option(options, "key_len")?.unwrap_or(DEFAULT_KEY_LEN);

        ScryptParams::new(log_n, r, p, key_len as usize).map_err(backend_err)
    }
}

impl PasswordStrategy for Scrypt {
    fn create(&self, password: &str, options: &Options) -> Result<String> {
        let params = Self::params(options)?;

        let mut salt_bytes = [0u8; 16];
        getrandom::fill(&mut salt_bytes).map_err(backend_err)?;
        let salt = SaltString::encode_b64(&salt_bytes).map_err(backend_err)?;

        ScryptKdf
            .hash_password_customized(password.as_bytes(), None, None, params, &salt)
            .map(|hash| hash.to_string())
            .map_err(backend_err)
    }

    fn verify(&self, password: &str, encoded_hash: &str) -> Result<bool> {
        let parsed = PasswordHash::new(encoded_hash).map_err(backend_err)?;
        Ok(ScryptKdf
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
