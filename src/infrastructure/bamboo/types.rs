//! Bamboo REST API response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response of `GET /rest/api/latest/info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    /// Bamboo release, e.g. `9.2.1`
    pub version: String,

    /// Edition name; empty on Data Center
    #[serde(default)]
    pub edition: String,

    /// When this build was produced
    #[serde(default)]
    pub build_date: Option<DateTime<Utc>>,

    /// Build number, e.g. `90201`
    #[serde(default)]
    pub build_number: String,

    /// Server state, e.g. `RUNNING` or `PAUSED`
    #[serde(default)]
    pub state: String,
}

impl ServerInfo {
    /// Returns true when the server accepts new builds
    pub fn is_running(&self) -> bool {
        self.state.eq_ignore_ascii_case("RUNNING")
    }
}
