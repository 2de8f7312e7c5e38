//! Service layer

pub mod config_resolver;

pub use config_resolver::ConfigResolver;
