//! Credentials remembered per environment.

use serde::{Deserialize, Serialize};

/// Credentials for one environment.
///
/// `client`/`client_secret` double as basic-auth username/password and as
/// UAA client credentials. `refresh_token` is only set after an interactive
/// UAA login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creds {
    /// Username or UAA client id
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client: String,
    /// Password or UAA client secret
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_secret: String,
    /// UAA refresh token
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub refresh_token: String,
}

impl Creds {
    /// Basic credentials from a username and password.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            client: username.into(),
            client_secret: password.into(),
            refresh_token: String::new(),
        }
    }

    /// Credentials holding only a refresh token.
    pub fn with_refresh_token(token: impl Into<String>) -> Self {
        Self {
            refresh_token: token.into(),
            ..Self::default()
        }
    }

    /// True when nothing is set.
    pub fn is_empty(&self) -> bool {
        self.client.is_empty() && self.client_secret.is_empty() && self.refresh_token.is_empty()
    }

    /// True when a client id is present, i.e. a service account rather
    /// than an interactive user.
    pub fn is_client(&self) -> bool {
        !self.client.is_empty()
    }
}
