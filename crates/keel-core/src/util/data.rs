//! YAML data handling utilities.

use keel_types::{KeelError, Result};
use serde_yaml::{Mapping, Value};
use std::path::Path;
use std::fs;

/// Load YAML from string.
///
/// An empty or whitespace-only document is `Value::Null`.
pub fn load_yaml(content: &str) -> Result<Value> {
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(content).map_err(KeelError::Yaml)
}

/// Load YAML from file.
pub fn load_yaml_file(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| KeelError::io_at("Reading file", path, e))?;
    load_yaml(&content)
}

/// Interpret a document as a top-level mapping.
///
/// `Null` is an empty mapping; any other non-mapping document is `None`.
pub fn as_mapping(value: Value) -> Option<Mapping> {
    match value {
        Value::Mapping(map) => Some(map),
        Value::Null => Some(Mapping::new()),
        _ => None,
    }
}

/// Top-level keys of a mapping, ignoring nested structure and non-string keys.
pub fn top_level_keys(map: &Mapping) -> Vec<String> {
    map.keys()
        .filter_map(|k| k.as_str().map(String::from))
        .collect()
}
