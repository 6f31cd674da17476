//! # Keel Types
//!
//! Core types, traits, and enums shared across all Keel crates.
//!
//! This crate provides the fundamental building blocks for the Keel CLI,
//! including:
//!
//! - Variable definitions and per-environment credentials
//! - Common enums for log levels and director authentication types
//! - Core traits for variable sources, value generators, config stores and the UI
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use keel_types::{AuthType, Creds, VariableDefinition};
//!
//! let def = VariableDefinition::named("admin_password").with_type("password");
//! assert_eq!(def.var_type.as_deref(), Some("password"));
//!
//! let creds = Creds::basic("admin", "secret");
//! assert!(creds.is_client());
//!
//! let auth: AuthType = "uaa".parse().unwrap();
//! assert_eq!(auth, AuthType::Uaa);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod creds;
pub mod variable;
pub mod enums;
pub mod traits;
pub mod config;

// Re-export common types for convenience
pub use errors::{KeelError, Result};
pub use creds::Creds;
pub use variable::VariableDefinition;
pub use enums::{LogLevel, AuthType};
pub use traits::{Variables, ValueGenerator, ConfigStore, Ui};
