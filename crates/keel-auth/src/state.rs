//! States shared by the login strategies.

use keel_types::{ConfigStore, KeelError};

/// Where a login attempt currently stands.
///
/// `C` is what gets checked: a config snapshot for basic auth, prompt
/// answers or the client grant for UAA. `attempt` counts checks, starting
/// at 1.
pub enum LoginState<C> {
    /// Nothing looked at yet
    Init,
    /// Ask the remote side whether the candidate authenticates
    CheckExisting {
        /// Credentials being tried
        candidate: C,
        /// 1-based check number
        attempt: u32,
    },
    /// Ask the user for new credentials
    PromptForCredentials {
        /// Number of the check the answers will feed
        attempt: u32,
    },
    /// Authenticated; persist `config` if there is anything to keep
    Success {
        /// Snapshot to save
        config: Option<Box<dyn ConfigStore>>,
    },
    /// Give up with `error`
    Fatal {
        /// Error handed back to the caller
        error: KeelError,
        /// Print the strategy's failure line first
        announce: bool,
    },
}

impl<C> LoginState<C> {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            LoginState::Init => "init",
            LoginState::CheckExisting { .. } => "check-existing",
            LoginState::PromptForCredentials { .. } => "prompt-for-credentials",
            LoginState::Success { .. } => "success",
            LoginState::Fatal { .. } => "fatal",
        }
    }

    /// Fatal state for an error raised during check number `attempt`.
    ///
    /// A failure on the very first check is handed back without the
    /// failure line; later ones follow earlier "Failed to ..." lines and
    /// get one too.
    pub fn check_failed(error: KeelError, attempt: u32) -> Self {
        LoginState::Fatal {
            error,
            announce: attempt > 1,
        }
    }
}
