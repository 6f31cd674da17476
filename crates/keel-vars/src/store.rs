//! File-backed variables store.
//!
//! The store is a single YAML mapping from variable name to value. When a
//! lookup misses and the definition declares a type, a value is generated,
//! written back to the file, and returned; later lookups read it from disk.

use crate::generator::GeneratorRegistry;
use keel_core::util::data::{as_mapping, load_yaml, top_level_keys};
use keel_core::util::{expand_path, read_if_exists, write_atomic};
use keel_types::{bail, KeelError, Result, VariableDefinition, Variables};
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

/// Variables persisted in a YAML file.
///
/// The file is re-read on every lookup and rewritten whole after each
/// generation. Only one process is expected to use a store at a time.
#[derive(Clone)]
pub struct VarsFsStore {
    path: PathBuf,
    generators: Arc<GeneratorRegistry>,
}

impl VarsFsStore {
    /// Store backed by `path` with the default generators.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            bail!(Validation, "Expected file path to be non-empty");
        }

        Ok(Self {
            path: expand_path(path),
            generators: Arc::new(GeneratorRegistry::default()),
        })
    }

    /// Replace the generator set.
    pub fn with_generators(mut self, generators: GeneratorRegistry) -> Self {
        self.generators = Arc::new(generators);
        self
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a variable, generating it when missing and typed.
    ///
    /// `lookup` is handed to the generator so it can resolve other
    /// variables (a certificate's CA) through the full source chain.
    pub fn get_with(
        &self,
        definition: &VariableDefinition,
        lookup: &dyn Variables,
    ) -> Result<Option<Value>> {
        let mut vars = self.load()?;

        if let Some(value) = vars.get(definition.name.as_str()) {
            return Ok(Some(value.clone()));
        }

        let Some(var_type) = definition.var_type.as_deref().filter(|t| !t.is_empty()) else {
            return Ok(None);
        };

        let value = self.generate(definition, var_type, lookup)?;

        vars.insert(Value::from(definition.name.clone()), value.clone());
        self.save(&vars)?;

        tracing::debug!(
            "Generated {} variable '{}' into {}",
            var_type,
            definition.name,
            self.path.display()
        );

        Ok(Some(value))
    }

    fn generate(
        &self,
        definition: &VariableDefinition,
        var_type: &str,
        lookup: &dyn Variables,
    ) -> Result<Value> {
        let wrap = |e: KeelError| KeelError::Generation {
            name: definition.name.clone(),
            message: e.to_string(),
        };

        let generator = self.generators.get_generator(var_type).map_err(wrap)?;
        generator.generate(&definition.options, lookup).map_err(wrap)
    }

    fn load(&self) -> Result<Mapping> {
        let Some(content) = read_if_exists(&self.path)? else {
            return Ok(Mapping::new());
        };

        let parse_err = |message: String| KeelError::Parse {
            path: self.path.display().to_string(),
            message,
        };

        let document = load_yaml(&content).map_err(|e| parse_err(e.to_string()))?;
        as_mapping(document).ok_or_else(|| parse_err("expected a mapping".to_string()))
    }

    fn save(&self, vars: &Mapping) -> Result<()> {
        let yaml = serde_yaml::to_string(vars)?;
        write_atomic(&self.path, &yaml)
    }
}

impl Variables for VarsFsStore {
    fn get(&self, definition: &VariableDefinition) -> Result<Option<Value>> {
        self.get_with(definition, self)
    }

    fn list(&self) -> Result<Vec<VariableDefinition>> {
        let vars = self.load()?;
        Ok(top_level_keys(&vars)
            .into_iter()
            .map(VariableDefinition::named)
            .collect())
    }
}

impl FromStr for VarsFsStore {
    type Err = KeelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Debug for VarsFsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VarsFsStore")
            .field("path", &self.path)
            .field("types", &self.generators.types())
            .finish()
    }
}
