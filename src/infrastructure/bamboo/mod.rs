//! Bamboo REST API integration

pub mod client;
pub mod errors;
pub mod types;

pub use client::{BambooClient, API_PREFIX};
pub use errors::BambooApiError;
pub use types::ServerInfo;
