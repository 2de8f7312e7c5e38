//! Bamboo provider plugin
//!
//! An infrastructure-as-code provider that authenticates against an
//! Atlassian Bamboo CI server and hands a shared client to the resources and
//! data sources it registers (currently none).
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): configuration model, diagnostics and port traits
//! - **Service Layer** (`services`): configuration resolution
//! - **Application Layer** (`application`): the Bamboo provider
//! - **Infrastructure Layer** (`infrastructure`): Bamboo client, settings,
//!   logging and the host adapter
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use bamboo_provider::{BambooProvider, Provider, ProviderConfig};
//!
//! let provider = BambooProvider::default();
//! let config = ProviderConfig::known("https://bamboo.example.com", "bot", "secret");
//! let data = provider.configure(&config).expect("valid configuration");
//! assert_eq!(data.client.base_url(), "https://bamboo.example.com");
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::{BambooProvider, ProviderData};
pub use domain::models::{
    ClientSettings, ConfigField, ConfigValue, Diagnostic, Diagnostics, ProviderConfig,
    ProviderSettings, ResolvedConfig, Schema,
};
pub use domain::ports::{Environment, MapEnvironment, ProcessEnvironment, Provider};
pub use infrastructure::bamboo::{BambooApiError, BambooClient};
pub use infrastructure::config::{ConfigError, SettingsLoader};
pub use services::ConfigResolver;
