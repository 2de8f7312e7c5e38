//! Resolution of the provider connection settings.
//!
//! Two phases, each reporting every offending field at once:
//! 1. any unknown value is fatal before the environment is consulted
//! 2. configured values win over `BAMBOO_*` variables, and every resulting
//!    value must be non-empty

use tracing::{debug, instrument};

use crate::domain::models::{
    AttributePath, ConfigField, ConfigValue, Diagnostics, EnvironmentDefaults, ProviderConfig,
    ResolvedConfig,
};
use crate::domain::ports::Environment;

/// Resolves the provider connection settings against environment fallbacks
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigResolver;

impl ConfigResolver {
    /// Create a resolver
    pub const fn new() -> Self {
        Self
    }

    /// Merge `config` over the fallbacks in `env`.
    ///
    /// Returns the resolved settings, or a non-empty list of error diagnostics
    /// with one entry per offending field.
    #[instrument(skip_all)]
    pub fn resolve(
        &self,
        config: &ProviderConfig,
        env: &dyn Environment,
    ) -> Result<ResolvedConfig, Diagnostics> {
        let mut diagnostics = Diagnostics::new();

        for field in ConfigField::ALL {
            if config.get(field).is_unknown() {
                add_unknown_value_error(&mut diagnostics, field);
            }
        }

        if diagnostics.has_error() {
            debug!(count = diagnostics.len(), "unknown configuration values");
            return Err(diagnostics);
        }

        let defaults = EnvironmentDefaults::read(env);
        let [host, username, password] =
            ConfigField::ALL.map(|field| effective_value(config.get(field), &defaults, field));

        for (field, value) in ConfigField::ALL.into_iter().zip([&host, &username, &password]) {
            if value.is_empty() {
                add_missing_value_error(&mut diagnostics, field);
            }
        }

        if diagnostics.has_error() {
            debug!(count = diagnostics.len(), "missing configuration values");
            return Err(diagnostics);
        }

        Ok(ResolvedConfig::new(host, username, password))
    }
}

/// Configured value when present, else the environment fallback, else empty
fn effective_value(
    value: &ConfigValue<String>,
    defaults: &EnvironmentDefaults,
    field: ConfigField,
) -> String {
    if let Some(value) = value.as_known() {
        debug!(%field, source = "configuration", "resolved value");
        return value.clone();
    }

    let fallback = defaults.get(field).unwrap_or_default();
    debug!(%field, source = field.env_var(), "resolved value");
    fallback.to_string()
}

fn add_unknown_value_error(diagnostics: &mut Diagnostics, field: ConfigField) {
    diagnostics.add_attribute_error(
        AttributePath::root(field.attribute()),
        format!("Unknown Bamboo API {}", field.label()),
        format!(
            "The provider cannot create the Bamboo API client as there is an unknown configuration value for the Bamboo API {}. \
             Either target apply the source of the value first, set the value statically in the configuration, or use the {} environment variable.",
            field.attribute(),
            field.env_var(),
        ),
    );
}

fn add_missing_value_error(diagnostics: &mut Diagnostics, field: ConfigField) {
    diagnostics.add_attribute_error(
        AttributePath::root(field.attribute()),
        format!("Missing Bamboo API {}", field.label()),
        format!(
            "The provider cannot create the Bamboo API client as there is a missing or empty value for the Bamboo API {}. \
             Set the {} value in the configuration or use the {} environment variable. \
             If either is already set, ensure the value is not empty.",
            field.attribute(),
            field.attribute(),
            field.env_var(),
        ),
    );
}
