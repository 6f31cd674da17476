//! Terminal implementation of [`Ui`].

use colored::Colorize;
use dialoguer::{Input, Password};
use keel_types::{KeelError, Result, Ui};

/// Prompts on the controlling terminal with dialoguer.
///
/// Messages go to stdout, errors to stderr in red.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalUi;

impl TerminalUi {
    /// New terminal UI.
    pub fn new() -> Self {
        Self
    }
}

fn cancelled(label: &str, err: dialoguer::Error) -> KeelError {
    KeelError::UserCancelled(format!("{}: {}", label, err))
}

impl Ui for TerminalUi {
    fn ask_text(&self, label: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| cancelled(label, e))
    }

    fn ask_password(&self, label: &str) -> Result<String> {
        Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| cancelled(label, e))
    }

    fn say(&self, message: &str) {
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message.red());
    }
}
