//! Random passwords.

use super::opt_u64;
use keel_types::{bail, Result, ValueGenerator, Variables};
use rand::{thread_rng, Rng};
use serde_yaml::{Mapping, Value};

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generates lowercase alphanumeric passwords.
///
/// Options: `length` (default 20).
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    default_length: usize,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self { default_length: 20 }
    }
}

impl PasswordGenerator {
    fn random_string(length: usize) -> String {
        let mut rng = thread_rng();
        (0..length)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect()
    }
}

impl ValueGenerator for PasswordGenerator {
    fn generate(&self, options: &Mapping, _lookup: &dyn Variables) -> Result<Value> {
        let length = match opt_u64(options, "length")? {
            None => self.default_length,
            Some(0) => bail!(Validation, "Expected password length to be greater than 0"),
            Some(n) => n as usize,
        };

        Ok(Value::String(Self::random_string(length)))
    }
}
