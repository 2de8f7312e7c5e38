//! Provider capability contract

use serde::{Deserialize, Serialize};

use crate::domain::models::{Diagnostics, ProviderConfig, Schema};

/// Identity the provider reports to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadata {
    /// Prefix of every resource and data source type name
    pub type_name: String,
    /// Provider release version
    pub version: String,
}

/// Constructor the host calls once per resource type instance
pub type ResourceFactory<D> = fn() -> Box<dyn Resource<D>>;

/// Constructor the host calls once per data source type instance
pub type DataSourceFactory<D> = fn() -> Box<dyn DataSource<D>>;

/// Capability contract the host framework drives.
///
/// `configure` is the only hook with behaviour of its own; the rest describe
/// what the provider offers. `Data` is whatever the provider hands to its
/// resources and data sources after a successful configure.
pub trait Provider: Send + Sync {
    /// Value shared with resources and data sources
    type Data: Clone + Send + Sync;

    /// Type name and version
    fn metadata(&self) -> ProviderMetadata;

    /// Schema of the provider configuration block
    fn schema(&self) -> Schema;

    /// Validate `config` and build the shared data, or explain what is wrong
    fn configure(&self, config: &ProviderConfig) -> Result<Self::Data, Diagnostics>;

    /// Managed resource types
    fn resources(&self) -> Vec<ResourceFactory<Self::Data>>;

    /// Data source types
    fn data_sources(&self) -> Vec<DataSourceFactory<Self::Data>>;
}

/// A managed resource type
pub trait Resource<D>: Send + Sync {
    /// Type name without the provider prefix
    fn type_name_suffix(&self) -> &'static str;

    /// Resource schema
    fn schema(&self) -> Schema;

    /// Receive the provider data produced by `configure`
    fn configure(&mut self, data: D);
}

/// A read-only data source type
pub trait DataSource<D>: Send + Sync {
    /// Type name without the provider prefix
    fn type_name_suffix(&self) -> &'static str;

    /// Data source schema
    fn schema(&self) -> Schema;

    /// Receive the provider data produced by `configure`
    fn configure(&mut self, data: D);
}

/// Full type name of every resource a provider registers
pub fn resource_type_names<P: Provider>(provider: &P) -> Vec<String> {
    let prefix = provider.metadata().type_name;
    provider
        .resources()
        .into_iter()
        .map(|factory| format!("{prefix}_{}", factory().type_name_suffix()))
        .collect()
}

/// Full type name of every data source a provider registers
pub fn data_source_type_names<P: Provider>(provider: &P) -> Vec<String> {
    let prefix = provider.metadata().type_name;
    provider
        .data_sources()
        .into_iter()
        .map(|factory| format!("{prefix}_{}", factory().type_name_suffix()))
        .collect()
}
