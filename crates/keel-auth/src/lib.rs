//! # Keel Auth
//!
//! Logging in to a director environment.
//!
//! Two strategies share one explicit state machine ([`state::LoginState`]):
//! - [`BasicLoginStrategy`]: username and password checked by the director
//! - [`UaaLoginStrategy`]: client credentials, or prompts served by the UAA
//!
//! Both retry for as long as the remote side answers "rejected" and the user
//! keeps typing; any other failure ends the attempt. Credentials are saved
//! only after they were accepted.
//!
//! ## Example
//!
//! ```no_run
//! use keel_auth::{login_strategy, SessionFactory, TerminalUi};
//! use keel_core::FsConfig;
//! use keel_types::AuthType;
//! use std::sync::Arc;
//!
//! # async fn run(sessions: SessionFactory) -> keel_types::Result<()> {
//! let config = FsConfig::load(FsConfig::default_path())?;
//! let ui = Arc::new(TerminalUi::new());
//! let strategy = login_strategy(AuthType::Uaa, sessions, Box::new(config), ui);
//! strategy.try_login().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod basic;
pub mod session;
pub mod state;
pub mod uaa;
pub mod ui;

#[cfg(test)]
mod fakes;

pub use basic::BasicLoginStrategy;
pub use session::{AccessToken, Director, Prompt, PromptAnswer, Session, SessionFactory, Uaa};
pub use uaa::UaaLoginStrategy;
pub use ui::TerminalUi;

use async_trait::async_trait;
use keel_types::{AuthType, ConfigStore, Result, Ui};
use std::sync::Arc;

/// Obtains working credentials for one environment.
#[async_trait]
pub trait LoginStrategy: Send + Sync {
    /// Run until logged in or a non-retryable error occurs.
    async fn try_login(&self) -> Result<()>;
}

/// Strategy for a director's authentication type.
pub fn login_strategy(
    auth_type: AuthType,
    session_factory: SessionFactory,
    config: Box<dyn ConfigStore>,
    ui: Arc<dyn Ui>,
) -> Box<dyn LoginStrategy> {
    match auth_type {
        AuthType::Basic => Box::new(BasicLoginStrategy::new(session_factory, config, ui)),
        AuthType::Uaa => Box::new(UaaLoginStrategy::new(session_factory, config, ui)),
    }
}
