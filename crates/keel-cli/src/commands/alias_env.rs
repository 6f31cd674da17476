//! Remember an environment under an alias.

use anyhow::{Context, Result};
use colored::Colorize;
use keel_core::FsConfig;
use keel_types::Ui;
use std::path::Path;

pub async fn execute(
    ui: &dyn Ui,
    config: &FsConfig,
    alias: &str,
    url: &str,
    ca_cert: Option<&Path>,
) -> Result<()> {
    let ca_cert = match ca_cert {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Reading CA certificate '{}'", path.display()))?,
        None => String::new(),
    };

    config
        .alias_environment(url, alias, &ca_cert)?
        .save()
        .context("Saving CLI config")?;

    tracing::info!(url, alias, "Aliased environment");
    ui.say(&format!("Using environment '{}' as '{}'", url.cyan(), alias.cyan()));

    Ok(())
}
