//! Declarative schema the host uses to validate provider configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Primitive attribute types used by this provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    /// UTF-8 string
    String,
}

/// One attribute of a configuration block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Value type
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    /// Must be set in configuration
    #[serde(default)]
    pub required: bool,
    /// May be omitted from configuration
    #[serde(default)]
    pub optional: bool,
    /// Host must avoid showing or persisting the value in plaintext
    #[serde(default)]
    pub sensitive: bool,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Attribute {
    /// Optional string attribute
    pub const fn optional_string() -> Self {
        Self {
            attr_type: AttributeType::String,
            required: false,
            optional: true,
            sensitive: false,
            description: String::new(),
        }
    }

    /// Mark as sensitive
    #[must_use]
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Schema of a configuration block, attributes keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema version, bumped on incompatible changes
    #[serde(default)]
    pub version: i64,
    /// Block description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Attributes by name
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    /// Empty version 0 schema
    pub fn v0() -> Self {
        Self::default()
    }

    /// Attach a block description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add an attribute
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }
}
