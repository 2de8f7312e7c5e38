//! Implementation of the `schema` command.

use anyhow::Result;
use serde::Serialize;

use crate::application::BambooProvider;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{ProviderSettings, Schema};
use crate::domain::ports::{Provider, ProviderMetadata};

/// Provider metadata together with its configuration schema
#[derive(Debug, Serialize)]
pub struct SchemaOutput {
    /// Type name and version
    pub provider: ProviderMetadata,
    /// Provider block schema
    pub schema: Schema,
}

impl CommandOutput for SchemaOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Provider \"{}\" v{}",
            self.provider.type_name, self.provider.version
        )];
        for (name, attribute) in &self.schema.attributes {
            let mut flags = vec![if attribute.required { "required" } else { "optional" }];
            if attribute.sensitive {
                flags.push("sensitive");
            }
            lines.push(format!("  {name} ({})", flags.join(", ")));
            if !attribute.description.is_empty() {
                lines.push(format!("      {}", attribute.description));
            }
        }
        lines.join("\n")
    }
}

/// Collect metadata and schema from a fresh provider
pub fn build(settings: &ProviderSettings) -> SchemaOutput {
    let provider = BambooProvider::new(settings.client.clone());
    SchemaOutput {
        provider: provider.metadata(),
        schema: provider.schema(),
    }
}

/// Print the schema
pub fn execute(settings: &ProviderSettings, json_mode: bool) -> Result<()> {
    output(&build(settings), json_mode);
    Ok(())
}
