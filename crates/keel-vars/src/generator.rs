//! Registry of value generators keyed by variable type.

use crate::types;
use keel_types::{KeelError, Result, ValueGenerator};
use std::collections::HashMap;

/// Maps a declared variable type to the generator producing its values.
pub struct GeneratorRegistry {
    generators: HashMap<String, Box<dyn ValueGenerator>>,
}

impl GeneratorRegistry {
    /// Registry without any generators.
    pub fn empty() -> Self {
        Self {
            generators: HashMap::new(),
        }
    }

    /// Add or replace the generator for `var_type`.
    pub fn with_generator(
        mut self,
        var_type: impl Into<String>,
        generator: impl ValueGenerator + 'static,
    ) -> Self {
        self.generators.insert(var_type.into(), Box::new(generator));
        self
    }

    /// Generator for `var_type`.
    pub fn get_generator(&self, var_type: &str) -> Result<&dyn ValueGenerator> {
        self.generators
            .get(var_type)
            .map(|g| g.as_ref())
            .ok_or_else(|| KeelError::Validation(format!("Unsupported value type: {}", var_type)))
    }

    /// Registered type names, sorted.
    pub fn types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.generators.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::empty()
            .with_generator(types::PASSWORD, types::PasswordGenerator::default())
            .with_generator(types::CERTIFICATE, types::CertificateGenerator)
            .with_generator(types::RSA, types::RsaGenerator::default())
            .with_generator(types::SSH, types::SshGenerator::default())
            .with_generator(types::UUID, types::UuidGenerator)
    }
}
