//! Ordered lookup across variable sources.

use crate::store::VarsFsStore;
use keel_types::{Result, VariableDefinition, Variables};
use serde_yaml::Value;

/// Resolves variables against sources in precedence order.
///
/// The first source holding a name wins outright; values are never merged
/// across sources. The vars store, if any, is asked last and is the only
/// source that may generate (and persist) a missing value.
pub struct VariableResolver {
    sources: Vec<Box<dyn Variables>>,
    store: Option<VarsFsStore>,
}

impl VariableResolver {
    /// Resolver over `sources` (highest precedence first), then `store`.
    pub fn new(sources: Vec<Box<dyn Variables>>, store: Option<VarsFsStore>) -> Self {
        Self { sources, store }
    }

}

impl Variables for VariableResolver {
    fn get(&self, definition: &VariableDefinition) -> Result<Option<Value>> {
        for source in &self.sources {
            if let Some(value) = source.get(definition)? {
                return Ok(Some(value));
            }
        }

        match &self.store {
            Some(store) => store.get_with(definition, self),
            None => Ok(None),
        }
    }

    /// Only the store is enumerated.
    fn list(&self) -> Result<Vec<VariableDefinition>> {
        match &self.store {
            Some(store) => store.list(),
            None => Ok(Vec::new()),
        }
    }
}
