//! SSH key pairs.

use super::{key_bits, rsa_key, DEFAULT_KEY_BITS};
use base64::engine::general_purpose;
use base64::Engine as _;
use keel_types::{KeelError, Result, ValueGenerator, Variables};
use rsa::pkcs1::{EncodeRsaPrivateKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;
use serde_yaml::{Mapping, Value};
use sha2::{Digest, Sha256};

/// Generates `{private_key, public_key, public_key_fingerprint}`.
///
/// `public_key` is in `authorized_keys` format; the fingerprint is the
/// OpenSSH `SHA256:` form. Options: `bits` (default 2048).
#[derive(Debug, Clone)]
pub struct SshGenerator {
    default_bits: usize,
}

impl Default for SshGenerator {
    fn default() -> Self {
        Self { default_bits: DEFAULT_KEY_BITS }
    }
}

impl SshGenerator {
    /// Wire encoding of an `ssh-rsa` public key (RFC 4253, section 6.6).
    fn public_key_blob(key: &RsaPublicKey) -> Vec<u8> {
        let mut buf = Vec::new();
        write_string(&mut buf, b"ssh-rsa");
        write_mpint(&mut buf, &key.e().to_bytes_be());
        write_mpint(&mut buf, &key.n().to_bytes_be());
        buf
    }

    fn fingerprint(blob: &[u8]) -> String {
        let digest = Sha256::digest(blob);
        format!("SHA256:{}", general_purpose::STANDARD_NO_PAD.encode(digest))
    }
}

fn write_string(buf: &mut Vec<u8>, data: &[u8]) {
    buf.extend_from_slice(&(data.len() as u32).to_be_bytes());
    buf.extend_from_slice(data);
}

fn write_mpint(buf: &mut Vec<u8>, data: &[u8]) {
    let start = data.iter().position(|b| *b != 0).unwrap_or(data.len());
    let trimmed = &data[start..];

    if trimmed.first().map_or(false, |b| b & 0x80 != 0) {
        buf.extend_from_slice(&((trimmed.len() + 1) as u32).to_be_bytes());
        buf.push(0);
        buf.extend_from_slice(trimmed);
    } else {
        write_string(buf, trimmed);
    }
}

impl ValueGenerator for SshGenerator {
    fn generate(&self, options: &Mapping, _lookup: &dyn Variables) -> Result<Value> {
        let key = rsa_key(key_bits(options, self.default_bits)?)?;

        let private_pem = key
            .to_pkcs1_pem(LineEnding::LF)
            .map_err(|e| KeelError::Other(format!("Encoding SSH private key: {}", e)))?;

        let blob = Self::public_key_blob(&RsaPublicKey::from(&key));
        let public_key = format!("ssh-rsa {}", general_purpose::STANDARD.encode(&blob));

        let mut value = Mapping::new();
        value.insert("private_key".into(), Value::String(private_pem.to_string()));
        value.insert("public_key".into(), Value::String(public_key));
        value.insert("public_key_fingerprint".into(), Value::String(Self::fingerprint(&blob)));
        Ok(Value::Mapping(value))
    }
}
