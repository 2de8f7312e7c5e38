//! Port trait definitions (Hexagonal Architecture)
//!
//! - Environment: read access to environment variables
//! - Provider: the capability contract the host framework drives
//! - Resource / DataSource: handlers that consume the configured provider data

pub mod environment;
pub mod provider;

pub use environment::{Environment, MapEnvironment, ProcessEnvironment};
pub use provider::{
    data_source_type_names, resource_type_names, DataSource, DataSourceFactory, Provider,
    ProviderMetadata, Resource, ResourceFactory,
};
