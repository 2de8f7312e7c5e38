//! Provider connection configuration, before and after resolution

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::config_value::ConfigValue;
use crate::domain::ports::Environment;

/// Environment variable consulted when `host` is not configured
pub const HOST_ENV_VAR: &str = "BAMBOO_HOST";
/// Environment variable consulted when `username` is not configured
pub const USERNAME_ENV_VAR: &str = "BAMBOO_USERNAME";
/// Environment variable consulted when `password` is not configured
pub const PASSWORD_ENV_VAR: &str = "BAMBOO_PASSWORD";

/// One of the three provider connection attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    /// Bamboo server base URL
    Host,
    /// Account used for basic authentication
    Username,
    /// Password of that account
    Password,
}

impl ConfigField {
    /// All fields, in the order they are validated and reported
    pub const ALL: [Self; 3] = [Self::Host, Self::Username, Self::Password];

    /// Attribute name in the provider schema
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Username => "username",
            Self::Password => "password",
        }
    }

    /// Capitalised label used in diagnostic summaries
    pub const fn label(self) -> &'static str {
        match self {
            Self::Host => "Host",
            Self::Username => "Username",
            Self::Password => "Password",
        }
    }

    /// Environment variable that backs this attribute
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Host => HOST_ENV_VAR,
            Self::Username => USERNAME_ENV_VAR,
            Self::Password => PASSWORD_ENV_VAR,
        }
    }

    /// Whether the host must keep this attribute out of logs and plans
    pub const fn is_sensitive(self) -> bool {
        matches!(self, Self::Password)
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute())
    }
}

/// Provider configuration exactly as the host passed it to `configure`
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Bamboo server base URL
    #[serde(default)]
    pub host: ConfigValue<String>,

    /// Basic-auth username
    #[serde(default)]
    pub username: ConfigValue<String>,

    /// Basic-auth password
    #[serde(default)]
    pub password: ConfigValue<String>,
}

impl ProviderConfig {
    /// Build a configuration with all three values set
    pub fn known(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: ConfigValue::Known(host.into()),
            username: ConfigValue::Known(username.into()),
            password: ConfigValue::Known(password.into()),
        }
    }

    /// Value of one attribute
    pub const fn get(&self, field: ConfigField) -> &ConfigValue<String> {
        match field {
            ConfigField::Host => &self.host,
            ConfigField::Username => &self.username,
            ConfigField::Password => &self.password,
        }
    }

    /// Replace one attribute, builder style
    #[must_use]
    pub fn with(mut self, field: ConfigField, value: ConfigValue<String>) -> Self {
        match field {
            ConfigField::Host => self.host = value,
            ConfigField::Username => self.username = value,
            ConfigField::Password => self.password = value,
        }
        self
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = match &self.password {
            ConfigValue::Unknown => "<unknown>",
            ConfigValue::Null => "<null>",
            ConfigValue::Known(_) => "[REDACTED]",
        };
        f.debug_struct("ProviderConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &password)
            .finish()
    }
}

/// Fallback values read from the process environment for one configure pass
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvironmentDefaults {
    /// `BAMBOO_HOST`
    pub host: Option<String>,
    /// `BAMBOO_USERNAME`
    pub username: Option<String>,
    /// `BAMBOO_PASSWORD`
    pub password: Option<String>,
}

impl EnvironmentDefaults {
    /// Snapshot the three variables from `env`
    pub fn read(env: &dyn Environment) -> Self {
        Self {
            host: env.var(HOST_ENV_VAR),
            username: env.var(USERNAME_ENV_VAR),
            password: env.var(PASSWORD_ENV_VAR),
        }
    }

    /// Fallback for one attribute
    pub fn get(&self, field: ConfigField) -> Option<&str> {
        match field {
            ConfigField::Host => self.host.as_deref(),
            ConfigField::Username => self.username.as_deref(),
            ConfigField::Password => self.password.as_deref(),
        }
    }
}

impl fmt::Debug for EnvironmentDefaults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentDefaults")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Connection settings after merging configuration over the environment.
///
/// Only the resolver builds one, and only when all three values are non-empty.
#[derive(Debug)]
pub struct ResolvedConfig {
    host: String,
    username: String,
    password: SecretString,
}

impl ResolvedConfig {
    pub(crate) fn new(host: String, username: String, password: String) -> Self {
        debug_assert!(!host.is_empty() && !username.is_empty() && !password.is_empty());
        Self {
            host,
            username,
            password: SecretString::from(password),
        }
    }

    /// Bamboo server base URL
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Basic-auth username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Split into host, username and password
    pub fn into_parts(self) -> (String, String, SecretString) {
        (self.host, self.username, self.password)
    }

    /// Value of one attribute, with the password exposed
    pub fn expose(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::Host => &self.host,
            ConfigField::Username => &self.username,
            ConfigField::Password => self.password.expose_secret(),
        }
    }
}
