//! Host adapter tests over in-memory streams
//!
//! Each test feeds request lines to [`ProviderServer::serve`] and decodes the
//! response lines it writes.

mod common;

use bamboo_provider::domain::models::Severity;
use bamboo_provider::infrastructure::server::{ProviderServer, Response};
use bamboo_provider::BambooProvider;
use common::provider_with_env;
use tokio::io::BufReader;

/// Serve `input` to completion and decode every response line
async fn exchange(server: &mut ProviderServer<BambooProvider>, input: &str) -> Vec<Response> {
    let mut output = Vec::new();
    server
        .serve(BufReader::new(input.as_bytes()), &mut output)
        .await
        .expect("serve failed");

    String::from_utf8(output)
        .expect("responses are not UTF-8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("response is not valid JSON"))
        .collect()
}

#[tokio::test]
async fn test_metadata_and_schema() {
    let mut server = ProviderServer::new(provider_with_env([]));
    let responses = exchange(
        &mut server,
        "{\"method\": \"get_metadata\"}\n{\"method\": \"get_schema\"}\n",
    )
    .await;

    assert_eq!(responses.len(), 2);

    let metadata = responses[0].metadata.as_ref().unwrap();
    assert_eq!(metadata.type_name, "bamboo");

    let schema = responses[1].schema.as_ref().unwrap();
    assert_eq!(schema.attributes.len(), 3);
    assert!(schema.attribute("password").unwrap().sensitive);
}

#[tokio::test]
async fn test_configure_success_stores_data() {
    let mut server = ProviderServer::new(provider_with_env([("BAMBOO_PASSWORD", "from-env")]));
    let responses = exchange(
        &mut server,
        r#"{"method": "configure_provider", "config": {"host": "https://ci.example.com", "username": "bot", "password": null}}"#,
    )
    .await;

    assert_eq!(responses[0].configured, Some(true));
    assert!(responses[0].diagnostics.is_empty());

    let data = server.data().expect("provider data should be stored");
    assert_eq!(data.client.base_url(), "https://ci.example.com");
}

#[tokio::test]
async fn test_configure_failure_returns_diagnostics_and_clears_data() {
    let mut server = ProviderServer::new(provider_with_env([]));

    let responses = exchange(
        &mut server,
        r#"{"method": "configure_provider", "config": {"host": "https://ci.example.com", "username": "bot", "password": "secret"}}"#,
    )
    .await;
    assert_eq!(responses[0].configured, Some(true));
    assert!(server.data().is_some());

    let responses = exchange(
        &mut server,
        r#"{"method": "configure_provider", "config": {"host": "74D93920-ED26-11E3-AC10-0800200C9A66"}}"#,
    )
    .await;

    let response = &responses[0];
    assert_eq!(response.configured, Some(false));
    assert_eq!(response.diagnostics.len(), 1);

    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.summary, "Unknown Bamboo API Host");
    assert_eq!(diagnostic.attribute.to_string(), "host");

    assert!(server.data().is_none());
}

#[tokio::test]
async fn test_configure_without_config_reports_missing_values() {
    let mut server = ProviderServer::new(provider_with_env([]));
    let responses = exchange(&mut server, r#"{"method": "configure_provider"}"#).await;

    assert_eq!(responses[0].configured, Some(false));
    assert_eq!(responses[0].diagnostics.len(), 3);
}

#[tokio::test]
async fn test_list_resources_and_data_sources_empty() {
    let mut server = ProviderServer::new(provider_with_env([]));
    let responses = exchange(
        &mut server,
        "{\"method\": \"list_resources\"}\n{\"method\": \"list_data_sources\"}\n",
    )
    .await;

    assert_eq!(responses[0].type_names, Some(Vec::new()));
    assert_eq!(responses[1].type_names, Some(Vec::new()));
}

#[tokio::test]
async fn test_malformed_line_does_not_stop_loop() {
    let mut server = ProviderServer::new(provider_with_env([]));
    let responses = exchange(
        &mut server,
        "not json\n\n{\"method\": \"apply\"}\n{\"method\": \"get_metadata\"}\n",
    )
    .await;

    assert_eq!(responses.len(), 3);
    assert!(responses[0].error.as_deref().unwrap().starts_with("Invalid request"));
    assert!(responses[1].error.is_some());
    assert!(responses[2].error.is_none());
    assert!(responses[2].metadata.is_some());
}

#[tokio::test]
async fn test_stop_ends_loop() {
    let mut server = ProviderServer::new(provider_with_env([]));
    let responses = exchange(
        &mut server,
        "{\"method\": \"stop\"}\n{\"method\": \"get_metadata\"}\n",
    )
    .await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0], Response::default());
}
