//! CLI structure and command definitions.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use keel_auth::TerminalUi;
use keel_core::FsConfig;
use keel_types::config::{LogConfig, LogFormat};
use keel_types::LogLevel;
use keel_vars::{VarFileArg, VarFlags, VarKv, VarsEnvArg, VarsFileArg, VarsFsStore};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Director environments and deployment variables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(long, global = true, env = "KEEL_CONFIG", default_value = "~/.keel/config")]
    pub config: PathBuf,

    /// Log level (none, error, warn, info, debug, trace)
    #[arg(long, global = true, env = "KEEL_LOG_LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List remembered environments
    Environments,

    /// Remember an environment under an alias
    #[command(name = "alias-env")]
    AliasEnv {
        /// Alias to assign
        alias: String,

        /// Director URL
        #[arg(short = 'e', long = "environment")]
        environment: String,

        /// File holding the director's CA certificate
        #[arg(long)]
        ca_cert: Option<PathBuf>,
    },

    /// Forget stored credentials for an environment
    #[command(name = "log-out")]
    LogOut {
        /// Environment URL or alias
        #[arg(short = 'e', long = "environment")]
        environment: String,
    },

    /// Resolve and list deployment variables
    #[command(subcommand)]
    Vars(VarsCommand),
}

#[derive(Subcommand)]
pub enum VarsCommand {
    /// Print one variable as YAML, generating it into the store if needed
    Get {
        /// Variable name
        name: String,

        /// Type to generate when missing (password, certificate, rsa, ssh, uuid)
        #[arg(long = "type")]
        var_type: Option<String>,

        /// Generation option; the value is read as YAML
        #[arg(long = "option", value_name = "KEY=VALUE")]
        options: Vec<VarKv>,

        #[command(flatten)]
        var_flags: VarFlagsArgs,
    },

    /// List variables persisted in a vars store
    List {
        /// Vars store file
        #[arg(long, value_name = "PATH")]
        vars_store: VarsFsStore,
    },
}

/// Variable sources, highest precedence first.
#[derive(Args, Debug, Clone, Default)]
#[command(next_help_heading = "Variables")]
pub struct VarFlagsArgs {
    /// Set variable
    #[arg(short = 'v', long = "var", value_name = "NAME=VALUE")]
    pub var: Vec<VarKv>,

    /// Set variable to a file's contents
    #[arg(long = "var-file", value_name = "NAME=PATH")]
    pub var_file: Vec<VarFileArg>,

    /// Load variables from a YAML file
    #[arg(short = 'l', long = "vars-file", value_name = "PATH")]
    pub vars_file: Vec<VarsFileArg>,

    /// Load variables from environment variables named PREFIX_name
    #[arg(long = "vars-env", value_name = "PREFIX")]
    pub vars_env: Vec<VarsEnvArg>,

    /// Load and save generated variables in a YAML file
    #[arg(long = "vars-store", value_name = "PATH")]
    pub vars_store: Option<VarsFsStore>,
}

impl From<VarFlagsArgs> for VarFlags {
    fn from(args: VarFlagsArgs) -> Self {
        VarFlags {
            var_kvs: args.var,
            var_files: args.var_file,
            vars_files: args.vars_file,
            vars_envs: args.vars_env,
            vars_store: args.vars_store,
        }
    }
}

impl Cli {
    pub fn init_logging(&self) -> Result<()> {
        keel_core::log::init(&LogConfig {
            level: self.log_level,
            format: LogFormat::Compact,
        })?;
        Ok(())
    }

    fn load_config(&self) -> Result<FsConfig> {
        FsConfig::load(&self.config).context("Loading CLI config")
    }

    pub async fn execute(&self) -> Result<()> {
        use crate::commands::*;

        let ui = TerminalUi::new();

        match &self.command {
            Commands::Environments => {
                environments::execute(&self.load_config()?).await
            }
            Commands::AliasEnv {
                alias,
                environment,
                ca_cert,
            } => {
                let config = self.load_config()?;
                alias_env::execute(&ui, &config, alias, environment, ca_cert.as_deref()).await
            }
            Commands::LogOut { environment } => {
                log_out::execute(&ui, &self.load_config()?, environment).await
            }
            Commands::Vars(VarsCommand::Get { name, var_type, options, var_flags }) => {
                vars::get(name, var_type.as_deref(), options, var_flags.clone().into()).await
            }
            Commands::Vars(VarsCommand::List { vars_store }) => {
                vars::list(vars_store).await
            }
        }
    }
}
