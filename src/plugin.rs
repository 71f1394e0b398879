//! The auto-join plugin
//!
//! [`Plugin`] keeps an immutable, versioned [`PluginState`] snapshot of the
//! loaded settings and the team they resolve to. User hooks take a cheap
//! clone of the current snapshot and enroll against it; configuration
//! reloads build a complete new snapshot and swap it in.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::configuration::Configuration;
use crate::context::HookContext;
use crate::enrollment::{self, EnrollmentOutcome};
use crate::error::{Error, ErrorCode, Result};
use crate::hooks::Hooks;
use crate::host::PluginApi;
use crate::http::{self, HttpRequest, HttpResponse};
use crate::types::{Team, User};

/// Settings and resolved team at one point in time
///
/// `team` is `None` when auto-join is disabled or nothing was loaded yet;
/// otherwise its name matches `configuration.team_name()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginState {
    version: u64,
    configuration: Configuration,
    team: Option<Team>,
}

impl PluginState {
    /// Incremented by every committed reload; 0 until the first one
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }
}

/// Adds new and returning users to the configured team
pub struct Plugin {
    api: Arc<dyn PluginApi>,
    state: RwLock<Arc<PluginState>>,
    /// Serializes reloads so their lookups and swaps cannot interleave
    reload_lock: Mutex<()>,
}

impl Plugin {
    /// Create an unconfigured plugin talking to `api`
    pub fn new(api: Arc<dyn PluginApi>) -> Self {
        Self {
            api,
            state: RwLock::new(Arc::new(PluginState::default())),
            reload_lock: Mutex::new(()),
        }
    }

    /// Get the capability API
    pub fn api(&self) -> &dyn PluginApi {
        self.api.as_ref()
    }

    /// Current snapshot
    pub async fn state(&self) -> Arc<PluginState> {
        self.state.read().await.clone()
    }

    /// Currently resolved team, if any
    pub async fn team(&self) -> Option<Team> {
        self.state().await.team.clone()
    }

    /// Resolve the team named by `configuration`
    ///
    /// An empty name resolves to `None` without asking the host. A team whose
    /// name differs from the configured one is rejected.
    async fn resolve_team(&self, configuration: &Configuration) -> Result<Option<Team>> {
        let Some(name) = configuration.team_name() else {
            return Ok(None);
        };

        match self.api.get_team_by_name(name).await {
            Ok(team) if team.name == name => Ok(Some(team)),
            Ok(team) => {
                self.api.log_error(
                    "Team lookup returned a different team",
                    &[
                        ("team_name", name),
                        ("returned_name", team.name.as_str()),
                        ("team_id", team.id.as_str()),
                    ],
                );
                Err(Error::new(
                    ErrorCode::InvalidState,
                    format!("lookup of team {name:?} returned team {:?}", team.name),
                ))
            }
            Err(e) => {
                self.api.log_error(
                    "Failed to find team",
                    &[("team_name", name), ("error", e.to_string().as_str())],
                );
                Err(e)
            }
        }
    }

    /// Resolve `configuration` and make it the active snapshot
    ///
    /// On failure the previous snapshot, configuration and team included,
    /// stays active.
    pub async fn apply_configuration(&self, configuration: Configuration) -> Result<Arc<PluginState>> {
        let _reload = self.reload_lock.lock().await;

        let team = self.resolve_team(&configuration).await?;

        let mut current = self.state.write().await;
        let next = Arc::new(PluginState {
            version: current.version + 1,
            configuration,
            team,
        });
        *current = next.clone();
        Ok(next)
    }

    /// Load settings from the host and apply them
    pub async fn reload(&self) -> Result<Arc<PluginState>> {
        let raw = self.api.load_plugin_configuration().await?;
        let configuration = Configuration::from_value(raw).inspect_err(|e| {
            self.api
                .log_error("Failed to load plugin configuration", &[("error", e.to_string().as_str())]);
        })?;
        let state = self.apply_configuration(configuration).await?;

        match state.team() {
            Some(team) => self.api.log_info(
                "Auto-join enabled",
                &[("team_name", team.name.as_str()), ("team_id", team.id.as_str())],
            ),
            None => self.api.log_info("Auto-join disabled, no team configured", &[]),
        }
        Ok(state)
    }

    /// Drop the loaded configuration and team
    pub async fn reset(&self) {
        let _reload = self.reload_lock.lock().await;
        let mut current = self.state.write().await;
        *current = Arc::new(PluginState {
            version: current.version + 1,
            ..PluginState::default()
        });
    }

    /// Add `user_id` to the configured team unless already a member
    ///
    /// Never fails; problems are logged through the host, tagged with the
    /// request ID of `ctx`.
    pub async fn ensure_user_in_team(&self, ctx: &HookContext, user_id: &str) -> EnrollmentOutcome {
        let state = self.state().await;
        enrollment::ensure_user_in_team(self.api.as_ref(), state.team(), user_id, ctx).await
    }
}

#[async_trait]
impl Hooks for Plugin {
    async fn on_activate(&self) -> Result<()> {
        self.reload().await.map(|_| ())
    }

    async fn on_deactivate(&self) -> Result<()> {
        self.reset().await;
        Ok(())
    }

    async fn on_configuration_change(&self) -> Result<()> {
        self.reload().await.map(|_| ())
    }

    async fn user_has_been_created(&self, ctx: &HookContext, user: &User) {
        self.ensure_user_in_team(ctx, &user.id).await;
    }

    async fn user_has_logged_in(&self, ctx: &HookContext, user: &User) {
        self.ensure_user_in_team(ctx, &user.id).await;
    }

    async fn serve_http(&self, _ctx: &HookContext, request: &HttpRequest) -> HttpResponse {
        http::greet(request)
    }
}
