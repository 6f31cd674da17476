//! CLI configuration for Keel (`~/.keel/config`).
//!
//! Remembers director environments: their URL, an optional alias, the CA
//! certificate used to reach them, and the credentials of the last
//! successful login.
//!
//! ## Copy-on-write
//!
//! `FsConfig` is an immutable value. Every update returns a new config and
//! leaves the receiver untouched; nothing is written until `save()` is called
//! on the snapshot you want to keep.
//!
//! ## Example
//!
//! ```no_run
//! use keel_core::config::FsConfig;
//! use keel_types::Creds;
//!
//! let config = FsConfig::load("~/.keel/config")?;
//! let updated = config
//!     .alias_environment("https://10.0.0.6:25555", "lab", "")?
//!     .set_credentials("lab", Creds::basic("admin", "secret"));
//! updated.save()?;
//! # Ok::<(), keel_types::KeelError>(())
//! ```

use crate::util::fs::{expand_path, read_if_exists, write_atomic};
use keel_types::config::{Environment, EnvironmentEntry};
use keel_types::{ConfigStore, Creds, KeelError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk layout of the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    environments: Vec<EnvironmentEntry>,
}

/// File-backed CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FsConfig {
    path: PathBuf,
    file: ConfigFile,
}

impl FsConfig {
    /// Load configuration from a path.
    ///
    /// If the file doesn't exist, an empty configuration is created.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = expand_path(path);

        let file = match read_if_exists(&path)? {
            Some(content) if !content.trim().is_empty() => serde_yaml::from_str(&content)
                .map_err(|e| KeelError::Config(format!(
                    "Unmarshalling config file '{}': {}",
                    path.display(),
                    e
                )))?,
            _ => ConfigFile::default(),
        };

        Ok(Self { path, file })
    }

    /// Get the default path for the CLI configuration.
    pub fn default_path() -> PathBuf {
        expand_path("~/.keel/config")
    }

    /// Path this configuration saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All remembered environments, in the order they were added.
    pub fn environments(&self) -> Vec<Environment> {
        self.file
            .environments
            .iter()
            .map(|e| Environment {
                url: e.url.clone(),
                alias: e.alias.clone(),
            })
            .collect()
    }

    /// Remember `url` under `alias`.
    ///
    /// An existing entry with the same URL or the same alias is overwritten.
    pub fn alias_environment(&self, url: &str, alias: &str, ca_cert: &str) -> Result<Self> {
        if url.is_empty() {
            return Err(KeelError::Validation("Expected non-empty environment URL".to_string()));
        }
        if alias.is_empty() {
            return Err(KeelError::Validation("Expected non-empty environment alias".to_string()));
        }

        let mut updated = self.clone();
        let position = updated
            .file
            .environments
            .iter()
            .position(|e| e.url == url || e.alias == alias);

        match position {
            Some(idx) => {
                let entry = &mut updated.file.environments[idx];
                entry.url = url.to_string();
                entry.alias = alias.to_string();
                entry.ca_cert = ca_cert.to_string();
            }
            None => updated.file.environments.push(EnvironmentEntry {
                url: url.to_string(),
                alias: alias.to_string(),
                ca_cert: ca_cert.to_string(),
                ..EnvironmentEntry::default()
            }),
        }

        Ok(updated)
    }

    /// Resolve an alias to its URL.
    ///
    /// Known URLs and unknown names are returned unchanged.
    pub fn resolve_environment(&self, url_or_alias: &str) -> String {
        self.find(url_or_alias)
            .map(|e| e.url.clone())
            .unwrap_or_else(|| url_or_alias.to_string())
    }

    /// CA certificate remembered for an environment.
    pub fn ca_cert(&self, url_or_alias: &str) -> String {
        self.find(url_or_alias)
            .map(|e| e.ca_cert.clone())
            .unwrap_or_default()
    }

    /// Credentials remembered for an environment.
    pub fn credentials(&self, url_or_alias: &str) -> Creds {
        self.find(url_or_alias)
            .map(|e| Creds {
                client: e.username.clone(),
                client_secret: e.password.clone(),
                refresh_token: e.refresh_token.clone(),
            })
            .unwrap_or_default()
    }

    /// Copy of this config with the environment's credentials replaced.
    ///
    /// Unknown environments get a new entry keyed by the given name.
    pub fn set_credentials(&self, url_or_alias: &str, creds: Creds) -> Self {
        let mut updated = self.clone();
        let idx = match updated.position(url_or_alias) {
            Some(idx) => idx,
            None => {
                updated.file.environments.push(EnvironmentEntry {
                    url: url_or_alias.to_string(),
                    ..EnvironmentEntry::default()
                });
                updated.file.environments.len() - 1
            }
        };

        let entry = &mut updated.file.environments[idx];
        entry.username = creds.client;
        entry.password = creds.client_secret;
        entry.refresh_token = creds.refresh_token;

        updated
    }

    /// Copy of this config without credentials for the environment.
    pub fn unset_credentials(&self, url_or_alias: &str) -> Self {
        let mut updated = self.clone();
        if let Some(idx) = updated.position(url_or_alias) {
            let entry = &mut updated.file.environments[idx];
            entry.username.clear();
            entry.password.clear();
            entry.refresh_token.clear();
        }
        updated
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let yaml = serde_yaml::to_string(&self.file)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| KeelError::io_at("Creating config directory", parent, e))?;
            }
        }

        tracing::debug!("Saving config to {}", self.path.display());
        write_atomic(&self.path, &yaml)
    }

    fn position(&self, url_or_alias: &str) -> Option<usize> {
        if url_or_alias.is_empty() {
            return None;
        }
        self.file
            .environments
            .iter()
            .position(|e| e.url == url_or_alias || e.alias == url_or_alias)
    }

    fn find(&self, url_or_alias: &str) -> Option<&EnvironmentEntry> {
        self.position(url_or_alias).map(|idx| &self.file.environments[idx])
    }
}

impl ConfigStore for FsConfig {
    fn credentials(&self, environment: &str) -> Creds {
        FsConfig::credentials(self, environment)
    }

    fn set_credentials(&self, environment: &str, creds: Creds) -> Box<dyn ConfigStore> {
        Box::new(FsConfig::set_credentials(self, environment, creds))
    }

    fn save(&self) -> Result<()> {
        FsConfig::save(self)
    }
}
