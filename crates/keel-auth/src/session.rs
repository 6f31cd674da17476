//! Collaborators a login strategy talks to.
//!
//! HTTP clients for the director and UAA live outside this crate; they plug
//! in by implementing these traits and handing out a [`SessionFactory`].

use async_trait::async_trait;
use keel_types::{ConfigStore, Creds, Result};
use serde::{Deserialize, Serialize};

/// Director API, as far as logging in is concerned.
#[async_trait]
pub trait Director: Send + Sync {
    /// Whether the session's credentials are accepted.
    ///
    /// `Ok(false)` and `Err(KeelError::RejectedCredentials)` both mean the
    /// director answered and said no; any other error means it could not be
    /// asked.
    async fn is_authenticated(&self) -> Result<bool>;
}

/// One field the UAA wants filled in for a password grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Form field key, e.g. "username" or "passcode"
    pub key: String,
    /// Label shown to the user
    pub label: String,
    /// "text" or "password"
    #[serde(rename = "type")]
    pub prompt_type: String,
}

impl Prompt {
    /// Whether the answer should be masked.
    pub fn is_password(&self) -> bool {
        self.prompt_type == "password"
    }
}

/// A user's answer to a [`Prompt`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptAnswer {
    /// Prompt key
    pub key: String,
    /// Entered value, never empty
    pub value: String,
}

/// Token issued by a successful grant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessToken {
    /// Bearer token
    pub value: String,
    /// Refresh token, empty for client grants
    pub refresh_token: String,
}

/// UAA token endpoint.
#[async_trait]
pub trait Uaa: Send + Sync {
    /// Prompts the UAA expects for an owner password grant.
    async fn prompts(&self) -> Result<Vec<Prompt>>;

    /// Grant for the session's client id and secret.
    async fn client_credentials_grant(&self) -> Result<AccessToken>;

    /// Grant for a user, using the non-empty prompt answers.
    async fn owner_password_credentials_grant(
        &self,
        answers: &[PromptAnswer],
    ) -> Result<AccessToken>;
}

/// Everything needed to talk to one environment.
pub trait Session: Send + Sync {
    /// Environment URL or alias this session targets.
    fn environment(&self) -> &str;

    /// Credentials the session would authenticate with.
    fn credentials(&self) -> Creds;

    /// Director client using [`Session::credentials`].
    fn director(&self) -> Result<Box<dyn Director>>;

    /// UAA client for the environment.
    fn uaa(&self) -> Result<Box<dyn Uaa>>;
}

/// Builds a session from a config snapshot.
///
/// Strategies call this again for each candidate snapshot so the session
/// always carries the credentials being tried.
pub type SessionFactory =
    Box<dyn Fn(&dyn ConfigStore) -> Result<Box<dyn Session>> + Send + Sync>;
