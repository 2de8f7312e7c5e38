//! Domain models for the Bamboo provider

pub mod config_value;
pub mod diagnostic;
pub mod provider_config;
pub mod schema;
pub mod settings;

pub use config_value::{ConfigValue, UNKNOWN_VALUE_MARKER};
pub use diagnostic::{AttributePath, Diagnostic, Diagnostics, Severity};
pub use provider_config::{
    ConfigField, EnvironmentDefaults, ProviderConfig, ResolvedConfig, HOST_ENV_VAR,
    PASSWORD_ENV_VAR, USERNAME_ENV_VAR,
};
pub use schema::{Attribute, AttributeType, Schema};
pub use settings::{ClientSettings, LogFormat, LoggingSettings, ProviderSettings, RotationPolicy};
