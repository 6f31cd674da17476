//! Random UUIDs.

use keel_types::{Result, ValueGenerator, Variables};
use serde_yaml::{Mapping, Value};
use uuid::Uuid;

/// Generates version 4 UUIDs. Takes no options.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl ValueGenerator for UuidGenerator {
    fn generate(&self, _options: &Mapping, _lookup: &dyn Variables) -> Result<Value> {
        Ok(Value::String(Uuid::new_v4().to_string()))
    }
}
