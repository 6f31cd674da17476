//! Value generators, one per variable type.

pub mod certificate;
pub mod password;
pub mod rsa;
pub mod ssh;
pub mod uuid_value;

pub use certificate::CertificateGenerator;
pub use password::PasswordGenerator;
pub use self::rsa::RsaGenerator;
pub use ssh::SshGenerator;
pub use uuid_value::UuidGenerator;

use keel_types::{KeelError, Result};
use serde_yaml::{Mapping, Value};

/// Type name of generated passwords.
pub const PASSWORD: &str = "password";
/// Type name of generated certificates.
pub const CERTIFICATE: &str = "certificate";
/// Type name of generated RSA key pairs.
pub const RSA: &str = "rsa";
/// Type name of generated SSH key pairs.
pub const SSH: &str = "ssh";
/// Type name of generated UUIDs.
pub const UUID: &str = "uuid";

/// Default modulus size for RSA and SSH keys.
pub const DEFAULT_KEY_BITS: usize = 2048;

fn opt_str<'a>(options: &'a Mapping, key: &str) -> Result<Option<&'a str>> {
    match options.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(invalid_option(key, "a string")),
    }
}

fn opt_bool(options: &Mapping, key: &str) -> Result<Option<bool>> {
    match options.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(invalid_option(key, "a boolean")),
    }
}

fn opt_u64(options: &Mapping, key: &str) -> Result<Option<u64>> {
    match options.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_u64().map(Some).ok_or_else(|| invalid_option(key, "a positive integer")),
    }
}

fn opt_str_list(options: &Mapping, key: &str) -> Result<Vec<String>> {
    match options.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Sequence(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(String::from)
                    .ok_or_else(|| invalid_option(key, "a list of strings"))
            })
            .collect(),
        Some(_) => Err(invalid_option(key, "a list of strings")),
    }
}

fn invalid_option(key: &str, expected: &str) -> KeelError {
    KeelError::Validation(format!("Expected option '{}' to be {}", key, expected))
}

fn rsa_key(bits: usize) -> Result<::rsa::RsaPrivateKey> {
    ::rsa::RsaPrivateKey::new(&mut rand::thread_rng(), bits)
        .map_err(|e| KeelError::Other(format!("Generating RSA private key: {}", e)))
}

fn key_bits(options: &Mapping, default: usize) -> Result<usize> {
    match opt_u64(options, "bits")? {
        None => Ok(default),
        Some(bits) if bits >= 1024 => Ok(bits as usize),
        Some(bits) => Err(KeelError::Validation(format!(
            "Expected key size of at least 1024 bits, got {}",
            bits
        ))),
    }
}
