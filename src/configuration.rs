//! Plugin settings
//!
//! The host stores plugin settings as a JSON object keyed by the setting
//! names declared in the plugin manifest. Only `TeamName` is recognised;
//! unknown keys are ignored and a missing `TeamName` disables auto-join.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings pushed by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Unique name of the team new users are added to
    #[serde(rename = "TeamName", default)]
    pub team_name: String,
}

impl Configuration {
    pub fn new(team_name: impl Into<String>) -> Self {
        Configuration {
            team_name: team_name.into(),
        }
    }

    /// Parse settings from the JSON value handed over by the host
    ///
    /// A JSON `null` is treated as "no settings saved yet".
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Configuration::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The configured team name with surrounding whitespace removed,
    /// or `None` when auto-join is disabled
    pub fn team_name(&self) -> Option<&str> {
        let name = self.team_name.trim();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.team_name().is_some()
    }
}
