//! Scripted collaborators for strategy tests.

use crate::session::{AccessToken, Director, Prompt, PromptAnswer, Session, SessionFactory, Uaa};
use async_trait::async_trait;
use keel_types::{ConfigStore, Creds, KeelError, Result, Ui};
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

const ENVIRONMENT: &str = "environment";

/// Records questions and messages; answers from queues.
#[derive(Default)]
pub struct FakeUi {
    text_answers: Mutex<VecDeque<String>>,
    password_answers: Mutex<VecDeque<String>>,
    asked_text: Mutex<Vec<String>>,
    asked_password: Mutex<Vec<String>>,
    said: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl FakeUi {
    pub fn with_answers(text: &[&str], passwords: &[&str]) -> Self {
        let ui = Self::default();
        ui.text_answers.lock().unwrap().extend(text.iter().map(|s| s.to_string()));
        ui.password_answers.lock().unwrap().extend(passwords.iter().map(|s| s.to_string()));
        ui
    }

    pub fn asked_text_labels(&self) -> Vec<String> {
        self.asked_text.lock().unwrap().clone()
    }

    pub fn asked_password_labels(&self) -> Vec<String> {
        self.asked_password.lock().unwrap().clone()
    }

    pub fn said(&self) -> Vec<String> {
        self.said.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    fn answer(
        queue: &Mutex<VecDeque<String>>,
        asked: &Mutex<Vec<String>>,
        label: &str,
    ) -> Result<String> {
        asked.lock().unwrap().push(label.to_string());
        queue
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| KeelError::UserCancelled("no more answers".to_string()))
    }
}

impl Ui for FakeUi {
    fn ask_text(&self, label: &str) -> Result<String> {
        Self::answer(&self.text_answers, &self.asked_text, label)
    }

    fn ask_password(&self, label: &str) -> Result<String> {
        Self::answer(&self.password_answers, &self.asked_password, label)
    }

    fn say(&self, message: &str) {
        self.said.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Copy-on-write config that logs the test environment's creds on save.
#[derive(Clone, Default)]
pub struct FakeConfig {
    creds: BTreeMap<String, Creds>,
    saves: Arc<Mutex<Vec<Creds>>>,
    fail_save: bool,
}

impl FakeConfig {
    pub fn with_creds(environment: &str, creds: Creds) -> Self {
        let mut config = Self::default();
        config.creds.insert(environment.to_string(), creds);
        config
    }

    pub fn failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }

    /// Creds of the test environment at each successful save.
    pub fn saves(&self) -> Vec<Creds> {
        self.saves.lock().unwrap().clone()
    }
}

impl ConfigStore for FakeConfig {
    fn credentials(&self, environment: &str) -> Creds {
        self.creds.get(environment).cloned().unwrap_or_default()
    }

    fn set_credentials(&self, environment: &str, creds: Creds) -> Box<dyn ConfigStore> {
        let mut updated = self.clone();
        updated.creds.insert(environment.to_string(), creds);
        Box::new(updated)
    }

    fn save(&self) -> Result<()> {
        if self.fail_save {
            return Err(KeelError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "fake-save-err",
            )));
        }
        self.saves.lock().unwrap().push(self.credentials(ENVIRONMENT));
        Ok(())
    }
}

pub enum DirectorReply {
    Authenticated(bool),
    Rejected,
    Transport(&'static str),
}

pub enum GrantReply {
    Token(&'static str),
    Rejected,
    Transport(&'static str),
}

impl GrantReply {
    fn into_result(self) -> Result<AccessToken> {
        match self {
            GrantReply::Token(refresh_token) => Ok(AccessToken {
                value: "access-token".to_string(),
                refresh_token: refresh_token.to_string(),
            }),
            GrantReply::Rejected => Err(KeelError::RejectedCredentials("fail".to_string())),
            GrantReply::Transport(msg) => Err(KeelError::Transport(msg.to_string())),
        }
    }
}

#[derive(Default)]
struct Script {
    director: VecDeque<DirectorReply>,
    checked: Vec<Creds>,
    prompts: Option<std::result::Result<Vec<Prompt>, &'static str>>,
    grants: VecDeque<GrantReply>,
    grant_answers: Vec<Vec<PromptAnswer>>,
    client_grant: Option<GrantReply>,
    client_grants: usize,
}

/// Replies shared by every session a factory builds.
#[derive(Clone, Default)]
pub struct Scripted(Arc<Mutex<Script>>);

impl Scripted {
    pub fn director(replies: Vec<DirectorReply>) -> Self {
        let scripted = Self::default();
        scripted.0.lock().unwrap().director = replies.into();
        scripted
    }

    pub fn uaa(
        prompts: std::result::Result<Vec<Prompt>, &'static str>,
        grants: Vec<GrantReply>,
    ) -> Self {
        let scripted = Self::default();
        {
            let mut script = scripted.0.lock().unwrap();
            script.prompts = Some(prompts);
            script.grants = grants.into();
        }
        scripted
    }

    pub fn with_client_grant(self, reply: GrantReply) -> Self {
        self.0.lock().unwrap().client_grant = Some(reply);
        self
    }

    /// Credentials each director check ran with.
    pub fn checked_creds(&self) -> Vec<Creds> {
        self.0.lock().unwrap().checked.clone()
    }

    pub fn grant_answers(&self) -> Vec<Vec<PromptAnswer>> {
        self.0.lock().unwrap().grant_answers.clone()
    }

    pub fn client_grants(&self) -> usize {
        self.0.lock().unwrap().client_grants
    }
}

struct FakeSession {
    environment: String,
    creds: Creds,
    scripted: Scripted,
}

impl Session for FakeSession {
    fn environment(&self) -> &str {
        &self.environment
    }

    fn credentials(&self) -> Creds {
        self.creds.clone()
    }

    fn director(&self) -> Result<Box<dyn Director>> {
        Ok(Box::new(FakeDirector {
            creds: self.creds.clone(),
            scripted: self.scripted.clone(),
        }))
    }

    fn uaa(&self) -> Result<Box<dyn Uaa>> {
        Ok(Box::new(FakeUaa(self.scripted.clone())))
    }
}

struct FakeDirector {
    creds: Creds,
    scripted: Scripted,
}

#[async_trait]
impl Director for FakeDirector {
    async fn is_authenticated(&self) -> Result<bool> {
        let mut script = self.scripted.0.lock().unwrap();
        script.checked.push(self.creds.clone());
        match script.director.pop_front() {
            Some(DirectorReply::Authenticated(authed)) => Ok(authed),
            Some(DirectorReply::Rejected) => {
                Err(KeelError::RejectedCredentials("fail".to_string()))
            }
            Some(DirectorReply::Transport(msg)) => Err(KeelError::Transport(msg.to_string())),
            None => Err(KeelError::Transport("no more director replies".to_string())),
        }
    }
}

struct FakeUaa(Scripted);

#[async_trait]
impl Uaa for FakeUaa {
    async fn prompts(&self) -> Result<Vec<Prompt>> {
        match &self.0 .0.lock().unwrap().prompts {
            Some(Ok(prompts)) => Ok(prompts.clone()),
            Some(Err(msg)) => Err(KeelError::Transport(msg.to_string())),
            None => Ok(Vec::new()),
        }
    }

    async fn client_credentials_grant(&self) -> Result<AccessToken> {
        let mut script = self.0 .0.lock().unwrap();
        script.client_grants += 1;
        script
            .client_grant
            .take()
            .unwrap_or(GrantReply::Transport("no client grant scripted"))
            .into_result()
    }

    async fn owner_password_credentials_grant(
        &self,
        answers: &[PromptAnswer],
    ) -> Result<AccessToken> {
        let mut script = self.0 .0.lock().unwrap();
        script.grant_answers.push(answers.to_vec());
        script
            .grants
            .pop_front()
            .unwrap_or(GrantReply::Transport("no more grant replies"))
            .into_result()
    }
}

/// Factory building sessions for `environment` from each config snapshot.
pub fn factory(environment: &str, scripted: Scripted) -> SessionFactory {
    let environment = environment.to_string();
    Box::new(move |config: &dyn ConfigStore| {
        Ok(Box::new(FakeSession {
            environment: environment.clone(),
            creds: config.credentials(&environment),
            scripted: scripted.clone(),
        }) as Box<dyn Session>)
    })
}
