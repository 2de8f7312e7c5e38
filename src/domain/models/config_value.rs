//! Tri-state configuration values

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire marker the host uses for a value that is not known until apply time.
///
/// Same literal Terraform uses for unknown values in its JSON shims.
pub const UNKNOWN_VALUE_MARKER: &str = "74D93920-ED26-11E3-AC10-0800200C9A66";

/// A provider configuration value as handed over by the host.
///
/// The host plans before it applies, so an attribute can depend on a value
/// that has not been computed yet (`Unknown`), be left out entirely (`Null`),
/// or carry a concrete value (`Known`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigValue<T> {
    /// Depends on an upstream value the host has not resolved yet
    Unknown,
    /// Absent from the configuration
    #[default]
    Null,
    /// Concrete value, possibly empty
    Known(T),
}

impl<T> ConfigValue<T> {
    /// Returns true for [`ConfigValue::Unknown`]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Returns true for [`ConfigValue::Null`]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the concrete value, if any
    pub const fn as_known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown | Self::Null => None,
        }
    }
}

impl From<&str> for ConfigValue<String> {
    fn from(value: &str) -> Self {
        Self::Known(value.to_string())
    }
}

impl Serialize for ConfigValue<String> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unknown => serializer.serialize_str(UNKNOWN_VALUE_MARKER),
            Self::Null => serializer.serialize_none(),
            Self::Known(value) => serializer.serialize_str(value),
        }
    }
}

impl<'de> Deserialize<'de> for ConfigValue<String> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConfigValueVisitor;

        impl<'de> Visitor<'de> for ConfigValueVisitor {
            type Value = ConfigValue<String>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, null, or the unknown value marker")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                if value == UNKNOWN_VALUE_MARKER {
                    Ok(ConfigValue::Unknown)
                } else {
                    Ok(ConfigValue::Known(value.to_string()))
                }
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
                if value == UNKNOWN_VALUE_MARKER {
                    Ok(ConfigValue::Unknown)
                } else {
                    Ok(ConfigValue::Known(value))
                }
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(ConfigValue::Null)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(ConfigValue::Null)
            }

            fn visit_some<D: Deserializer<'de>>(
                self,
                deserializer: D,
            ) -> Result<Self::Value, D::Error> {
                deserializer.deserialize_any(self)
            }
        }

        deserializer.deserialize_option(ConfigValueVisitor)
    }
}
