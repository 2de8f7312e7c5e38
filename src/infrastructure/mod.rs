//! Infrastructure layer module
//!
//! This module contains all infrastructure adapters and external integrations:
//! - Bamboo REST API client
//! - Plugin settings loading
//! - Logging infrastructure
//! - Host adapter
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod bamboo;
pub mod config;
pub mod logging;
pub mod server;
