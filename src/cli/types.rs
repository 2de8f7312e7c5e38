//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "terraform-provider-bamboo")]
#[command(about = "Infrastructure-as-code provider for Atlassian Bamboo", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand; `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// YAML file with plugin settings (logging, HTTP client)
    #[arg(long, global = true, env = "BAMBOO_PROVIDER_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Log at debug level regardless of settings
    #[arg(long, global = true)]
    pub debug: bool,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

impl Cli {
    /// Subcommand to run; `serve` when none was given
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Serve the provider to a host over stdin/stdout
    Serve,

    /// Print the provider configuration schema
    Schema,

    /// Resolve the connection settings from BAMBOO_* variables and contact the server
    Check {
        /// Stop after resolving the configuration, without any network call
        #[arg(long)]
        offline: bool,
    },
}
