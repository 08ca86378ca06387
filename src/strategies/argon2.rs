/*!
Argon2id strategy, producing PHC-format strings.

Options:
- `m_cost` - memory cost in KiB, default 19456
- `t_cost` - number of iterations, default 2
- `p_cost` - parallelism, default 1
*/

use argon2::Argon2 as Argon2Backend;
use argon2::{Algorithm, Params as Argon2Params, Version};
use password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};

use super::{PasswordStrategy, backend_err, u32_option};
use crate::error::Result;
use crate::options::Options;

/// Strategy backed by the `argon2` crate, fixed to Argon2id
pub struct Argon2;

impl Argon2 {
    fn backend(options: &Options) -> Result<Argon2Backend<'static>> {
        let m_cost = u32_option(options, "m_cost")?.unwrap_or(Argon2Params::DEFAULT_M_COST);
        let t_cost = u32_option(options, "t_cost")?.unwrap_or(Argon2Params::DEFAULT_T_COST);
        let p_cost = u32_option(options, "p_cost")?.unwrap_or(Argon2Params::DEFAULT_P_COST);

        let params = Argon2Params::new(m_cost, t_cost, p_cost, None).map_err(backend_err)?;
        Ok(Argon2Backend::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl PasswordStrategy for Argon2 {
    fn create(&self, password: &str, options: &Options) -> Result<String> {
        let backend = Self::backend(options)?;

        let mut salt_bytes = [0u8; 16];
        getrandom::fill(&mut salt_bytes).map_err(backend_err)?;
        let salt = SaltString::encode_b64(&salt_bytes).map_err(backend_err)?;

        backend
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(backend_err)
    }

    fn verify(&self, password: &str, encoded_hash: &str) -> Result<bool> {
        let parsed = PasswordHash::new(encoded_hash).map_err(backend_err)?;
        let backend = Self::backend(&Options::new())?;
        Ok(backend
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
