//! Implementation of the `serve` command.

use anyhow::{Context, Result};
use tracing::info;

use crate::application::{BambooProvider, PROVIDER_ADDRESS};
use crate::domain::models::ProviderSettings;
use crate::infrastructure::server::serve_stdio;

/// Serve the provider over stdin/stdout until the host stops it
pub async fn execute(settings: &ProviderSettings) -> Result<()> {
    info!(address = PROVIDER_ADDRESS, version = env!("CARGO_PKG_VERSION"), "serving provider");

    let provider = BambooProvider::new(settings.client.clone());
    serve_stdio(provider)
        .await
        .context("Provider server terminated with an error")
}
