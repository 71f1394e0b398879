use chrono::{DateTime, Utc};

use crate::types::{Team, TeamMember, TeamType};

use super::types::{MattermostTeam, MattermostTeamMember, MattermostTeamType};

/// Convert a Mattermost timestamp (milliseconds since epoch) to DateTime<Utc>
///
/// Returns None for zero or out-of-range values.
fn timestamp_to_datetime(timestamp_ms: i64) -> Option<DateTime<Utc>> {
    if timestamp_ms <= 0 {
        return None;
    }
    DateTime::from_timestamp(timestamp_ms / 1000, ((timestamp_ms % 1000) * 1_000_000) as u32)
}

impl From<MattermostTeamType> for TeamType {
    fn from(team_type: MattermostTeamType) -> Self {
        match team_type {
            MattermostTeamType::Open => TeamType::Open,
            MattermostTeamType::Invite => TeamType::Invite,
        }
    }
}

impl From<MattermostTeam> for Team {
    fn from(mm_team: MattermostTeam) -> Self {
        let mut team = Team::new(mm_team.id, mm_team.name, mm_team.display_name)
            .with_team_type(mm_team.team_type.into())
            .with_open_invite(mm_team.allow_open_invite);

        if !mm_team.description.is_empty() {
            team = team.with_description(mm_team.description);
        }
        if let Some(created_at) = timestamp_to_datetime(mm_team.create_at) {
            team = team.with_created_at(created_at);
        }

        team
    }
}

impl From<MattermostTeamMember> for TeamMember {
    fn from(mm_member: MattermostTeamMember) -> Self {
        TeamMember {
            team_id: mm_member.team_id,
            user_id: mm_member.user_id,
            roles: mm_member.roles,
            delete_at: mm_member.delete_at,
            scheme_user: mm_member.scheme_user,
            scheme_admin: mm_member.scheme_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mm_team() -> MattermostTeam {
        MattermostTeam {
            id: "t1".to_string(),
            create_at: 1_700_000_000_123,
            update_at: 0,
            delete_at: 0,
            display_name: "Town".to_string(),
            name: "town".to_string(),
            description: String::new(),
            team_type: MattermostTeamType::Open,
            allow_open_invite: true,
        }
    }

    #[test]
    fn test_team_conversion() {
        let team: Team = mm_team().into();
        assert_eq!(team.id, "t1");
        assert_eq!(team.name, "town");
        assert_eq!(team.team_type, TeamType::Open);
        assert!(team.description.is_none());
        assert_eq!(
            team.created_at.map(|t| t.timestamp_millis()),
            Some(1_700_000_000_123)
        );
    }

    #[test]
    fn test_zero_timestamp_is_none() {
        let mut raw = mm_team();
        raw.create_at = 0;
        let team: Team = raw.into();
        assert!(team.created_at.is_none());
    }

    #[test]
    fn test_member_conversion() {
        let member: TeamMember = MattermostTeamMember {
            team_id: "t1".to_string(),
            user_id: "u1".to_string(),
            roles: "team_user team_admin".to_string(),
            delete_at: 0,
            scheme_user: true,
            scheme_admin: true,
        }
        .into();
        assert_eq!(member.team_id, "t1");
        assert_eq!(member.roles, "team_user team_admin");
        assert!(member.scheme_admin);
    }
}
