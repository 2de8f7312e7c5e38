//! Domain layer for the Bamboo provider
//!
//! This module contains the configuration model and the port traits.

pub mod models;
pub mod ports;
