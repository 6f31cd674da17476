//! # Keel Core
//!
//! Core utilities, configuration management, and logging for the Keel CLI.
//!
//! This crate provides:
//!
//! - **Configuration**: the copy-on-write CLI config file (environments, aliases, credentials)
//! - **Logging**: `tracing` subscriber setup
//! - **File Operations**: YAML helpers, tilde expansion, atomic writes
//!
//! ## Example
//!
//! ```no_run
//! use keel_core::config::FsConfig;
//!
//! keel_core::log::init_default()?;
//!
//! let config = FsConfig::load(FsConfig::default_path())?;
//! for env in config.environments() {
//!     println!("{} {}", env.url, env.alias);
//! }
//! # Ok::<(), keel_types::KeelError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod log;
pub mod util;

// Re-export commonly used items
pub use config::FsConfig;
pub use keel_types::{KeelError, Result};
