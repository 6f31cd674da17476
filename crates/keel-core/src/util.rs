//! Common utility functions.

pub mod data;
pub mod fs;

// Re-export commonly used items
pub use data::{load_yaml, load_yaml_file};
pub use fs::{expand_path, read_if_exists, write_atomic};
