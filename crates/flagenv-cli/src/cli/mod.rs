//! CLI for resolving flags from arguments and the environment.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use flagenv_core::env::ProcessEnv;
use std::io;
use std::path::PathBuf;

use commands::{load_manifest, run_check_env, run_env_names, run_show, run_urls};

/// Top-level CLI for flagenv.
#[derive(Debug, Parser)]
#[command(name = "flagenv")]
#[command(about = "Resolve command-line flags with environment variable overrides", long_about = None)]
pub struct Cli {
    /// Flag manifest (TOML). Defaults to ~/.config/flagenv/flags.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Environment variable prefix; replaces the manifest's prefix.
    #[arg(long, global = true, value_name = "PREFIX")]
    pub prefix: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print every flag's final value and where it came from.
    Show {
        /// Flag arguments, after `--` (e.g. `-- --max-peers 3 -debug`).
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print the environment variable each flag is read from.
    EnvNames,

    /// List prefixed environment variables that match no flag.
    CheckEnv,

    /// Print the URLs of a URL-list flag, one per line.
    Urls {
        /// Flag name.
        flag: String,

        /// Flag arguments, after `--`.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let manifest = load_manifest(cli.manifest.as_deref(), cli.prefix.as_deref())?;
        tracing::debug!("using prefix {} with {} flag(s)", manifest.prefix, manifest.flags.len());

        let mut out = io::stdout().lock();
        match cli.command {
            CliCommand::Show { args } => run_show(&manifest, &args, &ProcessEnv, &mut out)?,
            CliCommand::EnvNames => run_env_names(&manifest, &mut out)?,
            CliCommand::CheckEnv => run_check_env(&manifest, &ProcessEnv, &mut out)?,
            CliCommand::Urls { flag, args } => {
                run_urls(&manifest, &flag, &args, &ProcessEnv, &mut out)?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
