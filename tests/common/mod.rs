//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

#![allow(dead_code)]

use bamboo_provider::{BambooProvider, ClientSettings, MapEnvironment};

/// The three `BAMBOO_*` fallback variables
pub const BAMBOO_ENV_VARS: [&str; 3] = ["BAMBOO_HOST", "BAMBOO_USERNAME", "BAMBOO_PASSWORD"];

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Provider whose fallbacks come from a fixed environment
pub fn provider_with_env<'a>(vars: impl IntoIterator<Item = (&'a str, &'a str)>) -> BambooProvider {
    BambooProvider::with_environment(ClientSettings::default(), MapEnvironment::from_iter(vars))
}

/// Body Bamboo returns from `GET /rest/api/latest/info`
pub fn server_info_body() -> String {
    serde_json::json!({
        "version": "9.2.1",
        "edition": "",
        "buildDate": "2023-01-24T12:44:14.000Z",
        "buildNumber": "90201",
        "state": "RUNNING"
    })
    .to_string()
}
