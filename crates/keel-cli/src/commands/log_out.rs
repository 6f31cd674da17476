//! Forget stored credentials.

use anyhow::{Context, Result};
use keel_core::FsConfig;
use keel_types::Ui;

pub async fn execute(ui: &dyn Ui, config: &FsConfig, environment: &str) -> Result<()> {
    config
        .unset_credentials(environment)
        .save()
        .context("Saving CLI config")?;

    ui.say(&format!("Logged out from '{}'", environment));
    Ok(())
}
