//! Username/password login against the director.

use crate::session::SessionFactory;
use crate::state::LoginState;
use crate::LoginStrategy;
use async_trait::async_trait;
use keel_types::{ConfigStore, Creds, Result, Ui};
use std::sync::Arc;

/// Prompts for a username and password until the director accepts them.
pub struct BasicLoginStrategy {
    session_factory: SessionFactory,
    config: Box<dyn ConfigStore>,
    ui: Arc<dyn Ui>,
}

impl BasicLoginStrategy {
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

    fn ask_for_creds(&self) -> Result<Creds> {
        let username = self.ui.ask_text("Username")?;
        let password = self.ui.ask_password("Password")?;
        Ok(Creds::basic(username, password))
    }

    async fn check(&self, candidate: &dyn ConfigStore) -> Result<bool> {
        let session = (self.session_factory)(candidate)?;
        let director = session.director()?;

        match director.is_authenticated().await {
            Err(e) if e.is_rejection() => Ok(false),
            other => other,
        }
    }
}

#[async_trait]
impl LoginStrategy for BasicLoginStrategy {
    async fn try_login(&self) -> Result<()> {
        let session = (self.session_factory)(self.config.as_ref())?;
        let environment = session.environment().to_string();
        let failure = format!("Failed to login to '{}'", environment);

        let mut state: LoginState<Box<dyn ConfigStore>> = LoginState::Init;
        loop {
            tracing::debug!(state = state.name(), environment = %environment, "basic login");

            state = match state {
                LoginState::Init => {
                    let creds = session.credentials();
                    if creds.is_empty() {
                        LoginState::PromptForCredentials { attempt: 1 }
                    } else {
                        LoginState::CheckExisting {
                            candidate: self.config.set_credentials(&environment, creds),
                            attempt: 1,
                        }
                    }
                }

                LoginState::PromptForCredentials { attempt } => match self.ask_for_creds() {
                    Ok(creds) => LoginState::CheckExisting {
                        candidate: self.config.set_credentials(&environment, creds),
                        attempt,
                    },
                    Err(error) => LoginState::Fatal { error, announce: true },
                },

                LoginState::CheckExisting { candidate, attempt } => {
                    match self.check(candidate.as_ref()).await {
                        Ok(true) => LoginState::Success { config: Some(candidate) },
                        Ok(false) => {
                            self.ui.error(&failure);
                            LoginState::PromptForCredentials { attempt: attempt + 1 }
                        }
                        Err(error) => LoginState::check_failed(error, attempt),
                    }
                }

                LoginState::Success { config } => {
                    if let Some(config) = config {
                        if let Err(error) = config.save() {
                            self.ui.error(&failure);
                            return Err(error);
                        }
                    }
                    self.ui.say(&format!("Logged in to '{}'", environment));
                    return Ok(());
                }

                LoginState::Fatal { error, announce } => {
                    if announce {
                        self.ui.error(&failure);
                    }
                    return Err(error);
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{factory, DirectorReply, FakeConfig, FakeUi, Scripted};
    use keel_types::KeelError;

    fn strategy(
        ui: &Arc<FakeUi>,
        config: &FakeConfig,
        replies: Vec<DirectorReply>,
    ) -> (BasicLoginStrategy, Scripted) {
        let scripted = Scripted::director(replies);
        let strategy = BasicLoginStrategy::new(
            factory("environment", scripted.clone()),
            Box::new(config.clone()),
            ui.clone(),
        );
        (strategy, scripted)
    }

    fn three_logins() -> Arc<FakeUi> {
        Arc::new(FakeUi::with_answers(
            &["asked-username1", "asked-username2", "asked-username3"],
            &["asked-password1", "asked-password2", "asked-password3"],
        ))
    }

    #[tokio::test]
    async fn test_existing_credentials_are_tried_first() {
        let ui = Arc::new(FakeUi::default());
        let config = FakeConfig::with_creds("environment", Creds::basic("user", "pass"));
        let (strategy, scripted) = strategy(&ui, &config, vec![DirectorReply::Authenticated(true)]);

        strategy.try_login().await.unwrap();

        assert!(ui.asked_text_labels().is_empty());
        assert_eq!(scripted.checked_creds(), vec![Creds::basic("user", "pass")]);
        assert_eq!(ui.said(), vec!["Logged in to 'environment'"]);
        assert_eq!(config.saves(), vec![Creds::basic("user", "pass")]);
    }

    #[tokio::test]
    async fn test_prompts_until_director_accepts() {
        let ui = three_logins();
        let config = FakeConfig::default();
        let (strategy, scripted) = strategy(
            &ui,
            &config,
            vec![
                DirectorReply::Authenticated(false),
                DirectorReply::Authenticated(false),
                DirectorReply::Authenticated(true),
            ],
        );

        strategy.try_login().await.unwrap();

        assert_eq!(ui.asked_text_labels(), vec!["Username"; 3]);
        assert_eq!(ui.asked_password_labels(), vec!["Password"; 3]);
        assert_eq!(
            ui.errors(),
            vec!["Failed to login to 'environment'", "Failed to login to 'environment'"]
        );
        assert_eq!(ui.said(), vec!["Logged in to 'environment'"]);
        assert_eq!(scripted.checked_creds().len(), 3);
        assert_eq!(
            config.saves(),
            vec![Creds::basic("asked-username3", "asked-password3")]
        );
    }

    #[tokio::test]
    async fn test_rejection_error_reprompts() {
        let ui = three_logins();
        let config = FakeConfig::default();
        let (strategy, _) = strategy(
            &ui,
            &config,
            vec![DirectorReply::Rejected, DirectorReply::Authenticated(true)],
        );

        strategy.try_login().await.unwrap();

        assert_eq!(ui.errors(), vec!["Failed to login to 'environment'"]);
        assert_eq!(config.saves(), vec![Creds::basic("asked-username2", "asked-password2")]);
    }

    #[tokio::test]
    async fn test_first_check_transport_error_is_returned_silently() {
        let ui = Arc::new(FakeUi::default());
        let config = FakeConfig::with_creds("environment", Creds::basic("user", "pass"));
        let (strategy, _) = strategy(&ui, &config, vec![DirectorReply::Transport("fake-err")]);

        let err = strategy.try_login().await.unwrap_err();

        assert!(matches!(err, KeelError::Transport(ref msg) if msg == "fake-err"));
        assert!(ui.errors().is_empty());
        assert!(config.saves().is_empty());
    }

    #[tokio::test]
    async fn test_later_check_transport_error_is_announced() {
        let ui = three_logins();
        let config = FakeConfig::default();
        let (strategy, _) = strategy(
            &ui,
            &config,
            vec![DirectorReply::Authenticated(false), DirectorReply::Transport("fake-err")],
        );

        let err = strategy.try_login().await.unwrap_err();

        assert_eq!(err.to_string(), "fake-err");
        assert_eq!(
            ui.errors(),
            vec!["Failed to login to 'environment'", "Failed to login to 'environment'"]
        );
        assert!(config.saves().is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_prompt_stops_login() {
        let ui = Arc::new(FakeUi::default());
        let config = FakeConfig::default();
        let (strategy, scripted) = strategy(&ui, &config, vec![]);

        let err = strategy.try_login().await.unwrap_err();

        assert!(matches!(err, KeelError::UserCancelled(_)));
        assert_eq!(ui.errors(), vec!["Failed to login to 'environment'"]);
        assert!(scripted.checked_creds().is_empty());
    }

    #[tokio::test]
    async fn test_save_failure_fails_login() {
        let ui = Arc::new(FakeUi::default());
        let config =
            FakeConfig::with_creds("environment", Creds::basic("user", "pass")).failing_save();
        let (strategy, _) = strategy(&ui, &config, vec![DirectorReply::Authenticated(true)]);

        let err = strategy.try_login().await.unwrap_err();

        assert_eq!(err.to_string(), "IO error: fake-save-err");
        assert_eq!(ui.errors(), vec!["Failed to login to 'environment'"]);
        assert!(ui.said().is_empty());
    }
}
