//! Team types
//!
//! A team is the host's grouping of users. The plugin configures a team by
//! its unique name and works with its opaque ID from then on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a team on the host platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier for this team
    pub id: String,
    /// Team name (unique, used in URLs and in plugin settings)
    pub name: String,
    /// Display name (what users see)
    pub display_name: String,
    /// Team description
    pub description: Option<String>,
    /// Team type (open or invite-only)
    pub team_type: TeamType,
    /// Whether users can invite others
    pub allow_open_invite: bool,
    /// When the team was created, if the host reported it
    pub created_at: Option<DateTime<Utc>>,
}

/// Team type/visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
pub enum TeamType {
    /// Open team - anyone can join
    Open,
    /// Invite-only team
    #[default]
    Invite,
}

impl Team {
    /// Create a new team
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Team {
            id: id.into(),
            name: name.into(),
            display_name: display_name.into(),
            description: None,
            team_type: TeamType::Invite,
            allow_open_invite: false,
            created_at: None,
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set team type
    pub fn with_team_type(mut self, team_type: TeamType) -> Self {
        self.team_type = team_type;
        self
    }

    /// Set allow open invite
    pub fn with_open_invite(mut self, allow: bool) -> Self {
        self.allow_open_invite = allow;
        self
    }

    /// Set creation time
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
