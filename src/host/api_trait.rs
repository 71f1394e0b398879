//! Capability API the host exposes to the plugin

use async_trait::async_trait;

use crate::context::LogLevel;
use crate::error::Result;
use crate::types::{Team, TeamMember};

/// Operations the plugin may call on its host
///
/// The host owns all team and membership data; the plugin only reads it
/// through this trait and asks for mutations. Every call may fail and
/// callers decide whether a failure is fatal.
#[async_trait]
pub trait PluginApi: Send + Sync {
    /// Load the plugin's saved settings as raw JSON
    ///
    /// Returns `Value::Null` when nothing has been saved yet.
    async fn load_plugin_configuration(&self) -> Result<serde_json::Value>;

    /// Look up a team by its unique name
    ///
    /// # Errors
    /// `ErrorCode::NotFound` if no team has that name.
    async fn get_team_by_name(&self, name: &str) -> Result<Team>;

    /// List one page of a user's team memberships
    ///
    /// # Arguments
    /// * `user_id` - The user whose memberships are listed
    /// * `page` - Zero-based page index
    /// * `per_page` - Page size; a page shorter than this is the last one
    async fn get_team_members_for_user(
        &self,
        user_id: &str,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<TeamMember>>;

    /// Add a user to a team
    async fn create_team_member(&self, team_id: &str, user_id: &str) -> Result<TeamMember>;

    /// Write a record to the host log
    fn log(&self, level: LogLevel, message: &str, fields: &[(&str, &str)]);

    fn log_debug(&self, message: &str, fields: &[(&str, &str)]) {
        self.log(LogLevel::Debug, message, fields);
    }

    fn log_info(&self, message: &str, fields: &[(&str, &str)]) {
        self.log(LogLevel::Info, message, fields);
    }

    fn log_warn(&self, message: &str, fields: &[(&str, &str)]) {
        self.log(LogLevel::Warning, message, fields);
    }

    fn log_error(&self, message: &str, fields: &[(&str, &str)]) {
        self.log(LogLevel::Error, message, fields);
    }
}
