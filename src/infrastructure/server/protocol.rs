//! Line-delimited JSON messages exchanged with the host.
//!
//! One request per input line, one response per output line.

use serde::{Deserialize, Serialize};

use crate::domain::models::{Diagnostics, ProviderConfig, Schema};
use crate::domain::ports::ProviderMetadata;

/// Version of this message format
pub const PROTOCOL_VERSION: u32 = 1;

/// First word of the handshake line
pub const HANDSHAKE_PREFIX: &str = "BAMBOO_PROVIDER";

/// Handshake line written before any response: `BAMBOO_PROVIDER|1|stdio`
pub fn handshake_line() -> String {
    format!("{HANDSHAKE_PREFIX}|{PROTOCOL_VERSION}|stdio")
}

/// A host request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Request {
    /// Provider type name and version
    GetMetadata,
    /// Provider configuration schema
    GetSchema,
    /// Validate configuration and build the client
    ConfigureProvider {
        /// Provider block as written by the practitioner
        #[serde(default)]
        config: ProviderConfig,
    },
    /// Registered resource type names
    ListResources,
    /// Registered data source type names
    ListDataSources,
    /// Shut the plugin down
    Stop,
}

/// Response to one request. Only the fields relevant to the request are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// `get_metadata` result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProviderMetadata>,

    /// `get_schema` result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,

    /// Whether `configure_provider` produced a client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configured: Option<bool>,

    /// `list_resources` / `list_data_sources` result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_names: Option<Vec<String>>,

    /// Problems with the request's content
    #[serde(default, skip_serializing_if = "Diagnostics::is_empty")]
    pub diagnostics: Diagnostics,

    /// The request itself could not be processed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    /// Response for a request that could not be processed
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ConfigValue;

    #[test]
    fn test_parse_configure_request() {
        let request: Request = serde_json::from_str(
            r#"{"method": "configure_provider", "config": {"host": "ci.example.com", "username": null}}"#,
        )
        .unwrap();

        let Request::ConfigureProvider { config } = request else {
            panic!("Expected configure_provider request");
        };
        assert_eq!(config.host, ConfigValue::Known("ci.example.com".to_string()));
        assert!(config.username.is_null());
        assert!(config.password.is_null());
    }

    #[test]
    fn test_parse_unit_requests() {
        let request: Request = serde_json::from_str(r#"{"method": "get_schema"}"#).unwrap();
        assert_eq!(request, Request::GetSchema);

        let request: Request = serde_json::from_str(r#"{"method": "stop"}"#).unwrap();
        assert_eq!(request, Request::Stop);
    }

    #[test]
    fn test_unknown_method_rejected() {
        assert!(serde_json::from_str::<Request>(r#"{"method": "apply"}"#).is_err());
    }

    #[test]
    fn test_empty_response_serializes_to_empty_object() {
        assert_eq!(serde_json::to_string(&Response::default()).unwrap(), "{}");
        assert_eq!(
            serde_json::to_string(&Response::error("bad")).unwrap(),
            r#"{"error":"bad"}"#
        );
    }

    #[test]
    fn test_handshake_line() {
        assert_eq!(handshake_line(), "BAMBOO_PROVIDER|1|stdio");
    }
}
