//! Implementation of the `check` command.

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::application::BambooProvider;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{ProviderConfig, ProviderSettings};
use crate::domain::ports::Provider;
use crate::infrastructure::bamboo::ServerInfo;

/// Connection settings in effect and, unless offline, what the server reported
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    /// Server base URL
    pub base_url: String,
    /// User the client authenticates as
    pub username: String,
    /// `GET /rest/api/latest/info` result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerInfo>,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!("Host:     {}", self.base_url),
            format!("Username: {}", self.username),
        ];
        match &self.server {
            Some(info) => lines.push(format!(
                "Server:   Bamboo {} (build {}, {})",
                info.version, info.build_number, info.state
            )),
            None => lines.push("Server:   not contacted (offline)".to_string()),
        }
        lines.join("\n")
    }
}

/// Configure from `BAMBOO_*` alone and optionally contact the server
pub async fn execute(settings: &ProviderSettings, offline: bool, json_mode: bool) -> Result<()> {
    let provider = BambooProvider::new(settings.client.clone());

    // Nothing is configured explicitly, so every value comes from BAMBOO_*
    let data = match provider.configure(&ProviderConfig::default()) {
        Ok(data) => data,
        Err(diagnostics) => {
            eprintln!("{diagnostics}");
            bail!("Bamboo provider configuration is invalid ({} problem(s))", diagnostics.len());
        }
    };

    let server = if offline {
        None
    } else {
        Some(
            data.client
                .server_info()
                .await
                .context("Failed to contact the Bamboo server")?,
        )
    };

    output(
        &CheckOutput {
            base_url: data.client.base_url().to_string(),
            username: data.client.username().to_string(),
            server,
        },
        json_mode,
    );
    Ok(())
}
