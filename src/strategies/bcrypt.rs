/*!
bcrypt strategy.

Options:
- `cost` - work factor in the 4..=31 range, default [`bcrypt::DEFAULT_COST`]
*/

use bcrypt::DEFAULT_COST;

use super::{PasswordStrategy, backend_err, u32_option};
use crate::error::Result;
use crate::options::Options;

/// Strategy backed by the `bcrypt` crate
pub struct Bcrypt;

impl PasswordStrategy for Bcrypt {
    fn create(&self, password: &str, options: &Options) -> Result<String> {
        let cost = u32_option(options, "cost")?.unwrap_or(DEFAULT_COST);
        bcrypt::hash(password, cost).map_err(backend_err)
    }

    fn verify(&self, password: &str, encoded_hash: &str) -> Result<bool> {
        bcrypt::verify(password, encoded_hash).map_err(backend_err)
    }
}
