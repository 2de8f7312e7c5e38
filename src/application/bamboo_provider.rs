//! Bamboo implementation of the host capability contract.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domain::models::{
    Attribute, ClientSettings, ConfigField, Diagnostic, Diagnostics, ProviderConfig, Schema,
};
use crate::domain::ports::{
    DataSourceFactory, Environment, ProcessEnvironment, Provider, ProviderMetadata,
    ResourceFactory,
};
use crate::infrastructure::bamboo::BambooClient;
use crate::services::ConfigResolver;

/// Type name prefix of everything this provider registers
pub const PROVIDER_TYPE_NAME: &str = "bamboo";

/// Registry address the provider is published under
pub const PROVIDER_ADDRESS: &str = "registry.terraform.io/UbiquitousBear/bamboo";

/// What resources and data sources receive after a successful configure
#[derive(Debug, Clone)]
pub struct ProviderData {
    /// Shared, immutable Bamboo client
    pub client: Arc<BambooClient>,
}

/// The Bamboo provider.
///
/// Holds no state between calls: every configure reads the environment afresh
/// and returns a new client.
pub struct BambooProvider {
    version: String,
    client_settings: ClientSettings,
    resolver: ConfigResolver,
    env: Box<dyn Environment>,
}

impl BambooProvider {
    /// Provider reading fallbacks from the process environment
    pub fn new(client_settings: ClientSettings) -> Self {
        Self::with_environment(client_settings, ProcessEnvironment)
    }

    /// Provider reading fallbacks from `env`
    pub fn with_environment(client_settings: ClientSettings, env: impl Environment + 'static) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            client_settings,
            resolver: ConfigResolver::new(),
            env: Box::new(env),
        }
    }
}

impl Default for BambooProvider {
    fn default() -> Self {
        Self::new(ClientSettings::default())
    }
}

impl Provider for BambooProvider {
    type Data = ProviderData;

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: PROVIDER_TYPE_NAME.to_string(),
            version: self.version.clone(),
        }
    }

    fn schema(&self) -> Schema {
        ConfigField::ALL.into_iter().fold(
            Schema::v0().with_description("Interact with an Atlassian Bamboo CI server."),
            |schema, field| schema.with_attribute(field.attribute(), attribute_for(field)),
        )
    }

    #[instrument(skip_all)]
    fn configure(&self, config: &ProviderConfig) -> Result<ProviderData, Diagnostics> {
        let resolved = self
            .resolver
            .resolve(config, self.env.as_ref())
            .inspect_err(|diagnostics| {
                warn!(count = diagnostics.len(), "bamboo provider configuration rejected");
            })?;

        let client = BambooClient::new(resolved, &self.client_settings).map_err(|err| {
            warn!(error = %err, "failed to create bamboo client");
            Diagnostics::from(Diagnostic::error(
                "Unable to Create Bamboo API Client",
                format!(
                    "An unexpected error occurred when creating the Bamboo API client. \
                     Bamboo client error: {err}"
                ),
            ))
        })?;

        info!(base_url = client.base_url(), username = client.username(), "bamboo provider configured");
        Ok(ProviderData {
            client: Arc::new(client),
        })
    }

    fn resources(&self) -> Vec<ResourceFactory<ProviderData>> {
        Vec::new()
    }

    fn data_sources(&self) -> Vec<DataSourceFactory<ProviderData>> {
        Vec::new()
    }
}

fn attribute_for(field: ConfigField) -> Attribute {
    let description = match field {
        ConfigField::Host => "URI of the Bamboo server, e.g. `https://bamboo.example.com`.",
        ConfigField::Username => "Username for Bamboo API authentication.",
        ConfigField::Password => "Password for Bamboo API authentication.",
    };
    let attribute = Attribute::optional_string().with_description(format!(
        "{description} May also be provided via the {} environment variable.",
        field.env_var()
    ));

    if field.is_sensitive() {
        attribute.sensitive()
    } else {
        attribute
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ConfigValue, Severity, HOST_ENV_VAR};
    use crate::domain::ports::{data_source_type_names, resource_type_names, MapEnvironment};

    fn provider(env: MapEnvironment) -> BambooProvider {
        BambooProvider::with_environment(ClientSettings::default(), env)
    }

    #[test]
    fn test_metadata() {
        let metadata = BambooProvider::default().metadata();
        assert_eq!(metadata.type_name, "bamboo");
        assert_eq!(metadata.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_schema_attributes() {
        let schema = BambooProvider::default().schema();

        assert_eq!(schema.attributes.len(), 3);
        for name in ["host", "username", "password"] {
            let attribute = schema.attribute(name).unwrap();
            assert!(attribute.optional, "{name} should be optional");
            assert!(!attribute.required, "{name} should not be required");
        }
        assert!(schema.attribute("password").unwrap().sensitive);
        assert!(!schema.attribute("host").unwrap().sensitive);
        assert!(schema
            .attribute("host")
            .unwrap()
            .description
            .contains("BAMBOO_HOST"));
    }

    #[test]
    fn test_configure_builds_client() {
        let config = ProviderConfig::known("https://ci.example.com/", "bot", "secret");
        let data = provider(MapEnvironment::new()).configure(&config).unwrap();

        assert_eq!(data.client.base_url(), "https://ci.example.com");
        assert_eq!(data.client.username(), "bot");
    }

    #[test]
    fn test_configure_reads_environment() {
        let config = ProviderConfig::known("ignored", "bot", "secret")
            .with(ConfigField::Host, ConfigValue::Null);
        let env = MapEnvironment::new().with_var(HOST_ENV_VAR, "https://env.example.com");
        let data = provider(env).configure(&config).unwrap();

        assert_eq!(data.client.base_url(), "https://env.example.com");
    }

    #[test]
    fn test_configure_returns_diagnostics() {
        let diagnostics = provider(MapEnvironment::new())
            .configure(&ProviderConfig::default())
            .unwrap_err();

        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics.iter().all(|d| d.severity == Severity::Error));
    }

    #[test]
    fn test_client_build_failure_is_reported() {
        let settings = ClientSettings {
            user_agent: "bad\nagent".to_string(),
            ..ClientSettings::default()
        };
        let config = ProviderConfig::known("https://ci.example.com", "bot", "secret");

        let diagnostics = BambooProvider::with_environment(settings, MapEnvironment::new())
            .configure(&config)
            .unwrap_err();

        assert_eq!(diagnostics.len(), 1);
        let diagnostic = diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.severity, Severity::Error);
        assert!(diagnostic.attribute.is_empty());
        assert_eq!(diagnostic.summary, "Unable to Create Bamboo API Client");
        assert!(diagnostic
            .detail
            .starts_with("An unexpected error occurred when creating the Bamboo API client."));
        assert!(diagnostic.detail.contains("Failed to build HTTP client"));
    }

    #[test]
    fn test_no_resources_or_data_sources() {
        let provider = BambooProvider::default();
        assert!(provider.resources().is_empty());
        assert!(provider.data_sources().is_empty());
        assert!(resource_type_names(&provider).is_empty());
        assert!(data_source_type_names(&provider).is_empty());
    }
}
