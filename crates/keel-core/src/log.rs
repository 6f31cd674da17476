//! Logging system for Keel.
//!
//! Structured logging through `tracing`. `RUST_LOG` always wins over the
//! configured level.

use keel_types::config::{LogConfig, LogFormat};
use keel_types::{KeelError, LogLevel, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the logging system with default configuration.
pub fn init_default() -> Result<()> {
    init(&LogConfig {
        level: LogLevel::Info,
        format: LogFormat::Compact,
    })
}

/// Initialize logging from configuration.
///
/// Calling this twice is an error; the first subscriber stays installed.
pub fn init(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_filter()));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.map_err(|e| KeelError::Other(format!("Failed to initialize logging: {}", e)))
}
