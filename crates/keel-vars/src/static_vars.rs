//! In-memory variable source.

use keel_types::{Result, VariableDefinition, Variables};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

/// A fixed set of named values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticVariables(BTreeMap<String, Value>);

impl StaticVariables {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a YAML mapping.
    ///
    /// Only string keys are kept; manifests never reference anything else.
    pub fn from_mapping(map: Mapping) -> Self {
        map.into_iter()
            .filter_map(|(k, v)| k.as_str().map(|k| (k.to_string(), v)))
            .collect()
    }

    /// Set a value, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Copy every value from `other`, which wins on conflicts.
    pub fn merge(&mut self, other: &StaticVariables) {
        for (name, value) in &other.0 {
            self.0.insert(name.clone(), value.clone());
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no values are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for StaticVariables {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Variables for StaticVariables {
    fn get(&self, definition: &VariableDefinition) -> Result<Option<Value>> {
        Ok(self.0.get(&definition.name).cloned())
    }

    fn list(&self) -> Result<Vec<VariableDefinition>> {
        Ok(self.0.keys().map(VariableDefinition::named).collect())
    }
}
