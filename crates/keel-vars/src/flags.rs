//! Command-line variable flags.
//!
//! Each flag type parses with `FromStr` so clap can build it directly;
//! [`VarFlags::as_variables`] turns a parsed set into a [`VariableResolver`].

use crate::resolver::VariableResolver;
use crate::static_vars::StaticVariables;
use crate::store::VarsFsStore;
use keel_core::util::data::as_mapping;
use keel_core::util::{expand_path, load_yaml, load_yaml_file};
use keel_types::{bail, KeelError, Result, Variables};
use serde_yaml::Value;
use std::fs;
use std::str::FromStr;

/// `--var name=value`
#[derive(Debug, Clone, PartialEq)]
pub struct VarKv {
    /// Variable name
    pub name: String,
    /// Value, always a string
    pub value: Value,
}

impl FromStr for VarKv {
    type Err = KeelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('=') {
            Some((name, value)) if !name.is_empty() => Ok(Self {
                name: name.to_string(),
                value: Value::String(value.to_string()),
            }),
            _ => Err(KeelError::Validation(format!(
                "Expected var '{}' to be in format 'name=value'",
                s
            ))),
        }
    }
}

/// `--var-file name=path`: the file's contents become the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VarFileArg {
    /// Single-entry map of name to file contents
    pub vars: StaticVariables,
}

impl FromStr for VarFileArg {
    type Err = KeelError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, path) = match s.split_once('=') {
            Some((name, path)) if !name.is_empty() && !path.is_empty() => (name, path),
            _ => {
                return Err(KeelError::Validation(format!(
                    "Expected var-file '{}' to be in format 'name=path'",
                    s
                )))
            }
        };

        let path = expand_path(path);
        let contents = fs::read_to_string(&path)
            .map_err(|e| KeelError::io_at("Reading variable from file", &path, e))?;

        let mut vars = StaticVariables::new();
        vars.insert(name, contents);
        Ok(Self { vars })
    }
}

/// `--vars-file path`: a YAML mapping of names to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VarsFileArg {
    /// Values from the file
    pub vars: StaticVariables,
}

impl FromStr for VarsFileArg {
    type Err = KeelError;

    fn from_str(s: &str) -> Result<Self> {
        let path = expand_path(s);
        let invalid = |message: String| {
            KeelError::Validation(format!(
                "Deserializing variables file '{}': {}",
                path.display(),
                message
            ))
        };

        let document = match load_yaml_file(&path) {
            Ok(doc) => doc,
            Err(KeelError::Yaml(e)) => return Err(invalid(e.to_string())),
            Err(e) => return Err(e),
        };
        let map = as_mapping(document).ok_or_else(|| invalid("expected a mapping".to_string()))?;

        Ok(Self {
            vars: StaticVariables::from_mapping(map),
        })
    }
}

/// `--vars-env PREFIX`: every `PREFIX_name=value` environment entry.
///
/// Values are decoded as YAML, so `PREFIX_port=8080` yields a number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VarsEnvArg {
    /// Values collected from the environment
    pub vars: StaticVariables,
}

impl VarsEnvArg {
    /// Collect prefixed entries from explicit `(key, value)` pairs.
    pub fn from_pairs<I>(prefix: &str, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        if prefix.is_empty() {
            bail!(Validation, "Expected environment variable prefix to be non-empty");
        }

        let full_prefix = format!("{}_", prefix);
        let mut vars = StaticVariables::new();

        for (key, raw) in pairs {
            let Some(name) = key.strip_prefix(&full_prefix) else {
                continue;
            };
            if name.is_empty() {
                continue;
            }

            let value = load_yaml(&raw).map_err(|e| {
                KeelError::Validation(format!(
                    "Deserializing YAML from environment variable '{}': {}",
                    key, e
                ))
            })?;
            vars.insert(name, value);
        }

        Ok(Self { vars })
    }
}

impl FromStr for VarsEnvArg {
    type Err = KeelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_pairs(s, std::env::vars())
    }
}

/// Every variable flag given on one command line.
#[derive(Debug, Clone, Default)]
pub struct VarFlags {
    /// `--var`, in order given
    pub var_kvs: Vec<VarKv>,
    /// `--var-file`, in order given
    pub var_files: Vec<VarFileArg>,
    /// `--vars-file`, in order given
    pub vars_files: Vec<VarsFileArg>,
    /// `--vars-env`, in order given
    pub vars_envs: Vec<VarsEnvArg>,
    /// `--vars-store`
    pub vars_store: Option<VarsFsStore>,
}

impl VarFlags {
    /// Resolver honouring flag precedence.
    ///
    /// Highest first: `--var` (later wins), `--var-file` (later wins),
    /// `--vars-file` (later file wins), `--vars-env` (later prefix wins),
    /// then `--vars-store`.
    pub fn as_variables(&self) -> VariableResolver {
        let mut sources: Vec<Box<dyn Variables>> = Vec::new();

        let kvs: StaticVariables = self
            .var_kvs
            .iter()
            .map(|kv| (kv.name.clone(), kv.value.clone()))
            .collect();
        sources.push(Box::new(kvs));

        let mut files = StaticVariables::new();
        for file in &self.var_files {
            files.merge(&file.vars);
        }
        sources.push(Box::new(files));

        for file in self.vars_files.iter().rev() {
            sources.push(Box::new(file.vars.clone()));
        }

        for env in self.vars_envs.iter().rev() {
            sources.push(Box::new(env.vars.clone()));
        }

        VariableResolver::new(sources, self.vars_store.clone())
    }
}
