//! Token-based login through the environment's UAA.

use crate::session::{PromptAnswer, SessionFactory, Uaa};
use crate::state::LoginState;
use crate::LoginStrategy;
use async_trait::async_trait;
use keel_types::{ConfigStore, Creds, Result, Ui};
use std::sync::Arc;

const FAILURE: &str = "Failed to authenticate with UAA";
const SUCCESS: &str = "Successfully authenticated with UAA";

/// What a UAA check submits.
pub enum UaaCandidate {
    /// Client id and secret already held by the session
    Client,
    /// Non-empty answers to the UAA's prompts
    Answers(Vec<PromptAnswer>),
}

/// Logs in through the UAA.
///
/// Sessions holding a client id get one client credentials grant and
/// nothing is saved. Otherwise the user answers the UAA's prompts until a
/// password grant succeeds, and only the refresh token is kept.
pub struct UaaLoginStrategy {
    session_factory: SessionFactory,
    config: Box<dyn ConfigStore>,
    ui: Arc<dyn Ui>,
}

impl UaaLoginStrategy {
    /// Strategy starting from `config`.
    pub fn new(
        session_factory: SessionFactory,
        config: Box<dyn ConfigStore>,
        ui: Arc<dyn Ui>,
    ) -> Self {
        Self {
            session_factory,
            config,
            ui,
        }
    }

    async fn ask_for_answers(&self, uaa: &dyn Uaa, attempt: u32) -> LoginState<UaaCandidate> {
        let prompts = match uaa.prompts().await {
            Ok(prompts) => prompts,
            Err(error) => return LoginState::check_failed(error, attempt),
        };

        let mut answers = Vec::with_capacity(prompts.len());
        for prompt in prompts {
            let answer = if prompt.is_password() {
                self.ui.ask_password(&prompt.label)
            } else {
                self.ui.ask_text(&prompt.label)
            };

            match answer {
                Ok(value) if value.is_empty() => {}
                Ok(value) => answers.push(PromptAnswer { key: prompt.key, value }),
                Err(error) => return LoginState::Fatal { error, announce: true },
            }
        }

        LoginState::CheckExisting {
            candidate: UaaCandidate::Answers(answers),
            attempt,
        }
    }

    async fn check(
        &self,
        uaa: &dyn Uaa,
        environment: &str,
        candidate: UaaCandidate,
        attempt: u32,
    ) -> LoginState<UaaCandidate> {
        match candidate {
            UaaCandidate::Client => match uaa.client_credentials_grant().await {
                Ok(_) => LoginState::Success { config: None },
                Err(error) => LoginState::Fatal { error, announce: true },
            },

            UaaCandidate::Answers(answers) => {
                match uaa.owner_password_credentials_grant(&answers).await {
                    Ok(token) => LoginState::Success {
                        config: Some(self.config.set_credentials(
                            environment,
                            Creds::with_refresh_token(token.refresh_token),
                        )),
                    },
                    Err(error) if error.is_rejection() => {
                        self.ui.error(FAILURE);
                        LoginState::PromptForCredentials { attempt: attempt + 1 }
                    }
                    Err(error) => LoginState::check_failed(error, attempt),
                }
            }
        }
    }
}

#[async_trait]
impl LoginStrategy for UaaLoginStrategy {
    async fn try_login(&self) -> Result<()> {
        let session = (self.session_factory)(self.config.as_ref())?;
        let environment = session.environment().to_string();
        let uaa = session.uaa()?;

        let mut state: LoginState<UaaCandidate> = LoginState::Init;
        loop {
            tracing::debug!(state = state.name(), environment = %environment, "UAA login");

            state = match state {
                LoginState::Init => {
                    if session.credentials().is_client() {
                        LoginState::CheckExisting {
                            candidate: UaaCandidate::Client,
                            attempt: 1,
                        }
                    } else {
                        LoginState::PromptForCredentials { attempt: 1 }
                    }
                }

                LoginState::PromptForCredentials { attempt } => {
                    self.ask_for_answers(uaa.as_ref(), attempt).await
                }

                LoginState::CheckExisting { candidate, attempt } => {
                    self.check(uaa.as_ref(), &environment, candidate, attempt).await
                }

                LoginState::Success { config } => {
                    if let Some(config) = config {
                        if let Err(error) = config.save() {
                            self.ui.error(FAILURE);
                            return Err(error);
                        }
                    }
                    self.ui.say(SUCCESS);
                    return Ok(());
                }

                LoginState::Fatal { error, announce } => {
                    if announce {
                        self.ui.error(FAILURE);
                    }
                    return Err(error);
                }
            };
        }
    }
}
