//! Core trait definitions for Keel abstractions.

use serde_yaml::{Mapping, Value};
use crate::creds::Creds;
use crate::errors::Result;
use crate::variable::VariableDefinition;

/// A source of variable values.
///
/// Implementers answer whether a variable has a value and, where they can,
/// enumerate the names they know about.
pub trait Variables: Send + Sync {
    /// Look up a variable.
    ///
    /// Returns `Ok(None)` when this source does not define it.
    fn get(&self, definition: &VariableDefinition) -> Result<Option<Value>>;

    /// List the variables this source knows about.
    fn list(&self) -> Result<Vec<VariableDefinition>>;
}

/// Generator for one value type (password, certificate, ...).
pub trait ValueGenerator: Send + Sync {
    /// Generate a new value.
    ///
    /// `lookup` resolves other variables by name, e.g. the CA a certificate
    /// should be signed with.
    fn generate(&self, options: &Mapping, lookup: &dyn Variables) -> Result<Value>;
}

/// Persisted CLI configuration, as far as logging in is concerned.
///
/// Updates never touch `self`; they return a fresh snapshot which the
/// caller may save.
pub trait ConfigStore: Send + Sync {
    /// Credentials for an environment URL or alias (empty if unknown).
    fn credentials(&self, environment: &str) -> Creds;

    /// Snapshot with the environment's credentials replaced.
    fn set_credentials(&self, environment: &str, creds: Creds) -> Box<dyn ConfigStore>;

    /// Persist this snapshot.
    fn save(&self) -> Result<()>;
}

/// Interactive terminal access.
pub trait Ui: Send + Sync {
    /// Ask for a visible answer.
    fn ask_text(&self, label: &str) -> Result<String>;

    /// Ask for a masked answer.
    fn ask_password(&self, label: &str) -> Result<String>;

    /// Print an informational line.
    fn say(&self, message: &str);

    /// Print an error line.
    fn error(&self, message: &str);
}
