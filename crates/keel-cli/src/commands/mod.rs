//! CLI command implementations.

pub mod alias_env;
pub mod environments;
pub mod log_out;
pub mod vars;
