//! Team membership records as reported by the host

use serde::{Deserialize, Serialize};

/// A user's membership in a team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub team_id: String,
    pub user_id: String,
    /// Space separated role names (e.g. "team_user team_admin")
    #[serde(default)]
    pub roles: String,
    /// Milliseconds since epoch the membership was removed, 0 if active
    #[serde(default)]
    pub delete_at: i64,
    #[serde(default)]
    pub scheme_user: bool,
    #[serde(default)]
    pub scheme_admin: bool,
}

impl TeamMember {
    pub fn new(team_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        TeamMember {
            team_id: team_id.into(),
            user_id: user_id.into(),
            roles: String::new(),
            delete_at: 0,
            scheme_user: true,
            scheme_admin: false,
        }
    }

    pub fn with_roles(mut self, roles: impl Into<String>) -> Self {
        self.roles = roles.into();
        self
    }

    pub fn is_deleted(&self) -> bool {
        self.delete_at > 0
    }
}
