use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use crate::context::{format_record, LogCallback, LogLevel};
use crate::error::{Error, ErrorCode, Result};
use crate::host::PluginApi;
use crate::types::{Team, TeamMember};

use super::client::MattermostClient;

/// `PluginApi` backed by the Mattermost REST API
///
/// Used when the plugin runs beside the server instead of inside it. The
/// server has no plugin settings store reachable over REST, so settings are
/// handed in by the embedding process.
///
/// The memberships endpoint is not paginated. Page 0 fetches the full list
/// and keeps it per user; later pages of the same walk are cut from that
/// list. The entry is dropped once the last page has been served.
pub struct MattermostApi {
    client: MattermostClient,
    settings: RwLock<serde_json::Value>,
    memberships: Mutex<HashMap<String, Vec<TeamMember>>>,
    log_callback: Option<LogCallback>,
}

impl MattermostApi {
    /// Create a new REST-backed capability API
    ///
    /// # Arguments
    /// * `server_url` - Base URL of the Mattermost server
    /// * `settings` - Plugin settings as JSON (e.g. `{"TeamName": "town"}`)
    pub fn new(server_url: &str, settings: serde_json::Value) -> Result<Self> {
        Ok(Self {
            client: MattermostClient::new(server_url)?,
            settings: RwLock::new(settings),
            memberships: Mutex::new(HashMap::new()),
            log_callback: None,
        })
    }

    /// Authenticate subsequent requests with a bot or personal access token
    pub async fn set_token(&self, token: impl Into<String>) {
        self.client.set_token(token.into()).await;
    }

    /// Set a log callback
    pub fn with_log_callback(mut self, callback: LogCallback) -> Self {
        self.log_callback = Some(callback);
        self
    }

    /// Replace the settings returned by `load_plugin_configuration`
    pub fn set_configuration(&self, settings: serde_json::Value) -> Result<()> {
        let mut guard = self
            .settings
            .write()
            .map_err(|_| Error::new(ErrorCode::InvalidState, "settings lock poisoned"))?;
        *guard = settings;
        Ok(())
    }

    /// Get the underlying client
    pub fn client(&self) -> &MattermostClient {
        &self.client
    }

    fn memberships_lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<TeamMember>>>> {
        self.memberships
            .lock()
            .map_err(|_| Error::new(ErrorCode::InvalidState, "membership cache lock poisoned"))
    }

    fn cached_memberships(&self, user_id: &str) -> Result<Option<Vec<TeamMember>>> {
        Ok(self.memberships_lock()?.get(user_id).cloned())
    }

    async fn fetch_memberships(&self, user_id: &str) -> Result<Vec<TeamMember>> {
        Ok(self
            .client
            .get_team_members_for_user(user_id)
            .await?
            .into_iter()
            .map(TeamMember::from)
            .collect())
    }
}

/// Cut one page out of an unpaginated listing
fn page_slice<T: Clone>(items: &[T], page: usize, per_page: usize) -> Vec<T> {
    items
        .iter()
        .skip(page.saturating_mul(per_page))
        .take(per_page)
        .cloned()
        .collect()
}

#[async_trait]
impl PluginApi for MattermostApi {
    async fn load_plugin_configuration(&self) -> Result<serde_json::Value> {
        let guard = self
            .settings
            .read()
            .map_err(|_| Error::new(ErrorCode::InvalidState, "settings lock poisoned"))?;
        Ok(guard.clone())
    }

    async fn get_team_by_name(&self, name: &str) -> Result<Team> {
        let team = self.client.get_team_by_name(name).await?;
        Ok(team.into())
    }

    async fn get_team_members_for_user(
        &self,
        user_id: &str,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<TeamMember>> {
        let cached = if page == 0 { None } else { self.cached_memberships(user_id)? };

        let members = match cached {
            Some(members) => members,
            None => self.fetch_memberships(user_id).await?,
        };

        let slice = page_slice(&members, page, per_page);
        let mut cache = self.memberships_lock()?;
        if slice.len() < per_page {
            cache.remove(user_id);
        } else {
            cache.insert(user_id.to_string(), members);
        }
        Ok(slice)
    }

    async fn create_team_member(&self, team_id: &str, user_id: &str) -> Result<TeamMember> {
        let member = self.client.add_team_member(team_id, user_id).await?;
        Ok(member.into())
    }

    fn log(&self, level: LogLevel, message: &str, fields: &[(&str, &str)]) {
        if let Some(callback) = &self.log_callback {
            callback(level, &format_record(message, fields));
        }
    }
}
