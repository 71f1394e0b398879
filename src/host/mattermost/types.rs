use serde::{Deserialize, Serialize};

/// Mattermost team type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MattermostTeamType {
    /// Open team - "O"
    #[serde(rename = "O")]
    Open,
    /// Invite-only team - "I"
    #[serde(rename = "I")]
    Invite,
}

impl MattermostTeamType {
    /// Get the string representation of the team type
    pub fn as_str(&self) -> &'static str {
        match self {
            MattermostTeamType::Open => "O",
            MattermostTeamType::Invite => "I",
        }
    }
}

/// Mattermost Team object from API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MattermostTeam {
    pub id: String,
    #[serde(default)]
    pub create_at: i64,
    #[serde(default)]
    pub update_at: i64,
    #[serde(default)]
    pub delete_at: i64,
    pub display_name: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub team_type: MattermostTeamType,
    #[serde(default)]
    pub allow_open_invite: bool,
}

/// Mattermost TeamMember object from API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MattermostTeamMember {
    pub team_id: String,
    pub user_id: String,
    #[serde(default)]
    pub roles: String,
    #[serde(default)]
    pub delete_at: i64,
    #[serde(default)]
    pub scheme_user: bool,
    #[serde(default)]
    pub scheme_admin: bool,
}

/// Body of `POST /teams/{team_id}/members`
#[derive(Debug, Clone, Serialize)]
pub struct AddTeamMemberRequest {
    pub team_id: String,
    pub user_id: String,
}

/// Mattermost error response structure
#[derive(Debug, Clone, Deserialize)]
pub struct MattermostErrorResponse {
    /// Error identifier (e.g., "app.team.get_by_name.missing.app_error")
    pub id: String,
    /// Human-readable error message
    pub message: String,
    /// Request ID for debugging with server logs
    #[serde(default)]
    pub request_id: String,
    /// HTTP status code
    pub status_code: i32,
}
