//! Team and team membership operations for Mattermost

use crate::error::Result;
use super::client::MattermostClient;
use super::types::{AddTeamMemberRequest, MattermostTeam, MattermostTeamMember};

impl MattermostClient {
    /// Get a team by its unique name
    ///
    /// # Arguments
    /// * `team_name` - The unique name of the team (not display name)
    ///
    /// # API Endpoint
    /// GET /teams/name/{team_name}
    pub async fn get_team_by_name(&self, team_name: &str) -> Result<MattermostTeam> {
        let response = self.get(&["teams", "name", team_name]).await?;
        self.handle_response(response).await
    }

    /// Get every team membership of a user
    ///
    /// # API Endpoint
    /// GET /users/{user_id}/teams/members
    pub async fn get_team_members_for_user(&self, user_id: &str) -> Result<Vec<MattermostTeamMember>> {
        let response = self.get(&["users", user_id, "teams", "members"]).await?;
        self.handle_response(response).await
    }

    /// Add a user to a team
    ///
    /// # API Endpoint
    /// POST /teams/{team_id}/members
    pub async fn add_team_member(&self, team_id: &str, user_id: &str) -> Result<MattermostTeamMember> {
        let request = AddTeamMemberRequest {
            team_id: team_id.to_string(),
            user_id: user_id.to_string(),
        };
        let response = self.post(&["teams", team_id, "members"], &request).await?;
        self.handle_response(response).await
    }
}
