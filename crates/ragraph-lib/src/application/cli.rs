use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use super::config::AppConfig;

/// ragraph CLI - resource allocation graph deadlock analysis
#[derive(Debug, Clone, Parser)]
#[command(name = "ragraph")]
#[command(about = "Model resource allocation graphs and detect deadlocks")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// ragraph commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Parse the process arguments, exiting with usage on error
    pub fn load() -> Self {
        Self::from(Cli::parse())
    }

    /// Parse an explicit argument list
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Self::from)
    }
}

impl From<Cli> for CliConfig {
    fn from(cli: Cli) -> Self {
        Self {
            app_config: cli.config,
            command: cli.command,
        }
    }
}

/// Available ragraph commands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Execute JSON request lines and print one JSON response per request
    Run {
        /// Script of JSON requests (reads stdin when omitted)
        #[arg(help = "File of newline-delimited JSON requests")]
        script: Option<PathBuf>,
    },

    /// Replay a script and report whether the final graph is deadlocked
    Check {
        /// Script of JSON requests (reads stdin when omitted)
        #[arg(help = "File of newline-delimited JSON requests")]
        script: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run { script: None }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
