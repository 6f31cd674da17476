//! RSA key pairs.

use super::{key_bits, rsa_key, DEFAULT_KEY_BITS};
use keel_types::{KeelError, Result, ValueGenerator, Variables};
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::pkcs8::{EncodePublicKey, LineEnding};
use rsa::RsaPublicKey;
use serde_yaml::{Mapping, Value};

/// Generates `{private_key, public_key}` PEM pairs.
///
/// The private key is PKCS#1, the public key SubjectPublicKeyInfo.
/// Options: `bits` (default 2048).
#[derive(Debug, Clone)]
pub struct RsaGenerator {
    default_bits: usize,
}

impl Default for RsaGenerator {
    fn default() -> Self {
        Self { default_bits: DEFAULT_KEY_BITS }
    }
}

impl ValueGenerator for RsaGenerator {
    fn generate(&self, options: &Mapping, _lookup: &dyn Variables) -> Result<Value> {
        let key = rsa_key(key_bits(options, self.default_bits)?)?;

        let private_pem = key
            .to_pkcs1_pem(LineEnding::LF)
            .map_err(|e| KeelError::Other(format!("Encoding RSA private key: {}", e)))?;
        let public_pem = RsaPublicKey::from(&key)
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| KeelError::Other(format!("Encoding RSA public key: {}", e)))?;

        let mut value = Mapping::new();
        value.insert("private_key".into(), Value::String(private_pem.to_string()));
        value.insert("public_key".into(), Value::String(public_pem));
        Ok(Value::Mapping(value))
    }
}
