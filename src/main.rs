//! terraform-provider-bamboo entry point.

use anyhow::Context;
use clap::Parser;

use bamboo_provider::cli::{commands, handle_error, Cli, Commands};
use bamboo_provider::infrastructure::logging::LoggerImpl;
use bamboo_provider::SettingsLoader;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut settings = match SettingsLoader::load(cli.settings.as_deref()) {
        Ok(settings) => settings,
        Err(err) => handle_error(&err, cli.json),
    };
    if cli.debug {
        settings.logging.level = "debug".to_string();
    }

    let _logger = match LoggerImpl::init(&settings.logging).context("Failed to initialize logging") {
        Ok(logger) => logger,
        Err(err) => handle_error(&err, cli.json),
    };

    let result = match cli.command() {
        Commands::Serve => commands::serve::execute(&settings).await,
        Commands::Schema => commands::schema::execute(&settings, cli.json),
        Commands::Check { offline } => commands::check::execute(&settings, offline, cli.json).await,
    };

    if let Err(err) = result {
        handle_error(&err, cli.json);
    }
}
