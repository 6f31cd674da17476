//! # Keel Vars
//!
//! Variable sources for manifest interpolation.
//!
//! Provides:
//! - Static, file, and environment sources built from command-line flags
//! - [`VariableResolver`], which consults sources in precedence order
//! - [`VarsFsStore`], a YAML-file store that generates and persists missing
//!   typed values (passwords, certificates, RSA and SSH keys, UUIDs)
//! - [`VarsCertLoader`] for reading a signing CA out of a variable
//!
//! ## Example
//!
//! ```no_run
//! use keel_types::{VariableDefinition, Variables};
//! use keel_vars::{VarFlags, VarsFsStore};
//!
//! let flags = VarFlags {
//!     var_kvs: vec!["director_name=lab".parse()?],
//!     vars_store: Some(VarsFsStore::new("creds.yml")?),
//!     ..VarFlags::default()
//! };
//!
//! let vars = flags.as_variables();
//! let password = vars.get(&VariableDefinition::named("admin_password").with_type("password"))?;
//! # Ok::<(), keel_types::KeelError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cert_loader;
pub mod flags;
pub mod generator;
pub mod resolver;
pub mod static_vars;
pub mod store;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use cert_loader::{LoadedCa, VarsCertLoader};
pub use flags::{VarFileArg, VarFlags, VarKv, VarsEnvArg, VarsFileArg};
pub use generator::GeneratorRegistry;
pub use resolver::VariableResolver;
pub use static_vars::StaticVariables;
pub use store::VarsFsStore;
