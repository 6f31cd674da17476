//! Error types for Keel operations.

use thiserror::Error;

/// The main error type for Keel operations.
///
/// Login strategies inspect the variant to decide whether to retry:
/// only [`KeelError::RejectedCredentials`] sends the user back to the
/// prompt, everything else ends the attempt.
#[derive(Error, Debug)]
pub enum KeelError {
    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error (bad flag, bad option)
    #[error("{0}")]
    Validation(String),

    /// A remote call failed outright (network, TLS, malformed response)
    #[error("{0}")]
    Transport(String),

    /// The remote service answered but did not accept the credentials
    #[error("{0}")]
    RejectedCredentials(String),

    /// A value could not be generated for a variable
    #[error("Generating variable '{name}': {message}")]
    Generation {
        /// Variable name
        name: String,
        /// Underlying failure
        message: String,
    },

    /// A variables file store could not be parsed
    #[error("Deserializing variables file store '{path}': {message}")]
    Parse {
        /// Backing file path
        path: String,
        /// Underlying failure
        message: String,
    },

    /// Certificate or key material could not be loaded or produced
    #[error("{0}")]
    Certificate(String),

    /// The user declined or aborted an interactive prompt
    #[error("Prompt cancelled: {0}")]
    UserCancelled(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl KeelError {
    /// Whether a login strategy should re-prompt after this error.
    pub fn is_rejection(&self) -> bool {
        matches!(self, KeelError::RejectedCredentials(_))
    }

    /// Attach a path to an I/O error without losing its kind.
    pub fn io_at(action: &str, path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        KeelError::Io(std::io::Error::new(
            err.kind(),
            format!("{} '{}': {}", action, path.as_ref().display(), err),
        ))
    }
}

/// A specialized Result type for Keel operations.
pub type Result<T> = std::result::Result<T, KeelError>;

/// Helper macro to bail out with a KeelError
///
/// This is used for expected error conditions.
///
/// # Example
///
/// ```ignore
/// if name.is_empty() {
///     bail!(Validation, "Expected non-empty name for '{}'", arg);
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::KeelError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::KeelError::$variant(format!($fmt, $($arg)*)))
    };
    ($msg:expr) => {
        return Err($crate::KeelError::Other($msg.to_string()))
    };
}
