//! List remembered environments.

use anyhow::Result;
use colored::Colorize;
use keel_core::FsConfig;

pub async fn execute(config: &FsConfig) -> Result<()> {
    let environments = config.environments();

    if environments.is_empty() {
        println!("{}", "No environments".yellow());
        return Ok(());
    }

    let width = environments.iter().map(|e| e.url.len()).max().unwrap_or(0).max(3);

    println!("{:<width$}  {}", "URL".bold(), "Alias".bold(), width = width);
    for env in &environments {
        println!("{:<width$}  {}", env.url, env.alias.cyan(), width = width);
    }
    println!("\n{} environments", environments.len());

    Ok(())
}
