//! In-memory host used by the unit tests
//!
//! Records every capability call so tests can assert on exactly what the
//! plugin asked the host to do.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::PluginApi;
use crate::context::{format_record, LogLevel};
use crate::error::{Error, ErrorCode, Result};
use crate::types::{Team, TeamMember};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    LoadConfiguration,
    GetTeamByName(String),
    ListMembers { user_id: String, page: usize, per_page: usize },
    CreateMember { team_id: String, user_id: String },
}

#[derive(Default)]
pub(crate) struct FakeHost {
    settings: Mutex<serde_json::Value>,
    teams: Mutex<HashMap<String, Team>>,
    memberships: Mutex<HashMap<String, Vec<TeamMember>>>,
    fail_lookup: Mutex<bool>,
    fail_listing_at: Mutex<Option<usize>>,
    fail_create: Mutex<bool>,
    calls: Mutex<Vec<Call>>,
    logs: Mutex<Vec<(LogLevel, String)>>,
}

impl FakeHost {
    pub fn new() -> Self {
        FakeHost::default()
    }

    pub fn with_settings(self, settings: serde_json::Value) -> Self {
        *self.settings.lock().unwrap() = settings;
        self
    }

    pub fn with_team(self, team: Team) -> Self {
        self.teams.lock().unwrap().insert(team.name.clone(), team);
        self
    }

    /// Answer lookups of `name` with `team`, whatever its own name is
    pub fn with_team_at(self, name: &str, team: Team) -> Self {
        self.teams.lock().unwrap().insert(name.to_string(), team);
        self
    }

    /// Give `user_id` memberships in `count` generated teams
    pub fn with_member_of_many(self, user_id: &str, count: usize) -> Self {
        {
            let mut memberships = self.memberships.lock().unwrap();
            let list = memberships.entry(user_id.to_string()).or_default();
            for i in 0..count {
                list.push(TeamMember::new(format!("other-{i}"), user_id));
            }
        }
        self
    }

    pub fn with_member(self, user_id: &str, team_id: &str) -> Self {
        self.memberships
            .lock()
            .unwrap()
            .entry(user_id.to_string())
            .or_default()
            .push(TeamMember::new(team_id, user_id));
        self
    }

    pub fn set_settings(&self, settings: serde_json::Value) {
        *self.settings.lock().unwrap() = settings;
    }

    pub fn set_fail_lookup(&self, fail: bool) {
        *self.fail_lookup.lock().unwrap() = fail;
    }

    pub fn set_fail_listing_at(&self, page: Option<usize>) {
        *self.fail_listing_at.lock().unwrap() = page;
    }

    pub fn set_fail_create(&self, fail: bool) {
        *self.fail_create.lock().unwrap() = fail;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn create_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::CreateMember { .. }))
            .collect()
    }

    pub fn list_pages(&self) -> Vec<usize> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::ListMembers { page, .. } => Some(page),
                _ => None,
            })
            .collect()
    }

    pub fn logs_at(&self, level: LogLevel) -> Vec<String> {
        self.logs
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, line)| line.clone())
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PluginApi for FakeHost {
    async fn load_plugin_configuration(&self) -> Result<serde_json::Value> {
        self.record(Call::LoadConfiguration);
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn get_team_by_name(&self, name: &str) -> Result<Team> {
        self.record(Call::GetTeamByName(name.to_string()));
        if *self.fail_lookup.lock().unwrap() {
            return Err(Error::new(ErrorCode::NetworkError, "host unavailable"));
        }
        self.teams
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("no team named {name}")))
    }

    async fn get_team_members_for_user(
        &self,
        user_id: &str,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<TeamMember>> {
        self.record(Call::ListMembers {
            user_id: user_id.to_string(),
            page,
            per_page,
        });
        if *self.fail_listing_at.lock().unwrap() == Some(page) {
            return Err(Error::new(ErrorCode::NetworkError, "listing failed"));
        }
        let memberships = self.memberships.lock().unwrap();
        let all = memberships.get(user_id).map(Vec::as_slice).unwrap_or(&[]);
        Ok(all.iter().skip(page * per_page).take(per_page).cloned().collect())
    }

    async fn create_team_member(&self, team_id: &str, user_id: &str) -> Result<TeamMember> {
        self.record(Call::CreateMember {
            team_id: team_id.to_string(),
            user_id: user_id.to_string(),
        });
        if *self.fail_create.lock().unwrap() {
            return Err(Error::new(ErrorCode::PermissionDenied, "cannot add member"));
        }
        let member = TeamMember::new(team_id, user_id);
        self.memberships
            .lock()
            .unwrap()
            .entry(user_id.to_string())
            .or_default()
            .push(member.clone());
        Ok(member)
    }

    fn log(&self, level: LogLevel, message: &str, fields: &[(&str, &str)]) {
        self.logs
            .lock()
            .unwrap()
            .push((level, format_record(message, fields)));
    }
}
