//! Resolve and list deployment variables.

use anyhow::{bail, Context, Result};
use keel_core::util::load_yaml;
use keel_types::{VariableDefinition, Variables};
use keel_vars::{VarFlags, VarKv, VarsFsStore};
use serde_yaml::Value;

pub async fn get(
    name: &str,
    var_type: Option<&str>,
    options: &[VarKv],
    flags: VarFlags,
) -> Result<()> {
    let mut definition = VariableDefinition::named(name);
    if let Some(var_type) = var_type {
        definition = definition.with_type(var_type);
    }
    for option in options {
        let raw = option.value.as_str().unwrap_or_default();
        let value = load_yaml(raw)
            .with_context(|| format!("Parsing option '{}'", option.name))?;
        definition = definition.with_option(&option.name, value);
    }

    let resolver = flags.as_variables();
    match resolver.get(&definition)? {
        Some(Value::String(s)) => println!("{}", s),
        Some(value) => print!("{}", serde_yaml::to_string(&value)?),
        None => bail!("Expected to find variable '{}'", name),
    }

    Ok(())
}

pub async fn list(store: &VarsFsStore) -> Result<()> {
    for definition in store.list()? {
        println!("{}", definition.name);
    }
    Ok(())
}
