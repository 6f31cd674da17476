//! Variable definitions used during manifest interpolation.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// A request for a named variable.
///
/// `var_type` and `options` only matter to sources that can generate values
/// (the vars store); every other source looks at `name` alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableDefinition {
    /// Variable name
    pub name: String,
    /// Declared type, e.g. "password" or "certificate"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub var_type: Option<String>,
    /// Type-specific generation options
    #[serde(default, skip_serializing_if = "Mapping::is_empty")]
    pub options: Mapping,
}

impl VariableDefinition {
    /// Definition carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the declared type.
    pub fn with_type(mut self, var_type: impl Into<String>) -> Self {
        self.var_type = Some(var_type.into());
        self
    }

    /// Add a generation option.
    pub fn with_option(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options.insert(Value::from(key), value.into());
        self
    }

    /// Look up a string option.
    pub fn option_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(Value::as_str)
    }
}
