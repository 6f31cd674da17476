//! Configuration types and structures.

use serde::{Deserialize, Serialize};

/// Log configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level for this output
    pub level: crate::LogLevel,
    /// Log format (pretty, json, compact)
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: crate::LogLevel::None,
            format: default_log_format(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format with colors
    Pretty,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// One remembered environment as stored in the CLI config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentEntry {
    /// Director URL
    pub url: String,
    /// Short name for the URL
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alias: String,
    /// PEM CA certificate used to reach the director
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ca_cert: String,
    /// Basic auth username or UAA client
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,
    /// Basic auth password or UAA client secret
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
    /// UAA refresh token
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub refresh_token: String,
}

/// An environment as shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Environment {
    /// Director URL
    pub url: String,
    /// Alias, possibly empty
    pub alias: String,
}
