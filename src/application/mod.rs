//! Application layer
//!
//! Wires the configuration resolver and the Bamboo client into the provider
//! contract the host drives.

pub mod bamboo_provider;

pub use bamboo_provider::{BambooProvider, ProviderData, PROVIDER_ADDRESS, PROVIDER_TYPE_NAME};
