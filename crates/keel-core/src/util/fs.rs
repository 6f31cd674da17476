//! Filesystem utilities.

use keel_types::{KeelError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Expand a leading tilde to the home directory.
pub fn expand_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }

    path.to_path_buf()
}

/// Read a file, treating a missing file as `None`.
pub fn read_if_exists(path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(KeelError::io_at("Reading file", path, e)),
    }
}

/// Replace a file's contents in one rename.
///
/// The data is written to a sibling temporary file first so readers never
/// observe a half-written file. Concurrent writers are not coordinated: the
/// last rename wins.
pub fn write_atomic(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| KeelError::io_at("Writing file", path, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| KeelError::io_at("Writing file", path, e))?;
    tmp.persist(path)
        .map_err(|e| KeelError::io_at("Writing file", path, e.error))?;

    Ok(())
}
