//! Host event interface
//!
//! The host drives the plugin through a fixed set of named events. A host
//! integration converts whatever it receives into a [`HookEvent`] and hands
//! it to [`dispatch`], which routes it to the matching [`Hooks`] method.

use async_trait::async_trait;

use crate::context::HookContext;
use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::User;

/// Lifecycle and event callbacks a plugin can implement
///
/// Every method has a no-op default so implementors only override the
/// events they care about. The host may call the user hooks concurrently.
#[async_trait]
pub trait Hooks: Send + Sync {
    /// Called once when the plugin starts
    ///
    /// Returning an error aborts activation.
    async fn on_activate(&self) -> Result<()> {
        Ok(())
    }

    /// Called when the plugin is being stopped
    async fn on_deactivate(&self) -> Result<()> {
        Ok(())
    }

    /// Called whenever the host's copy of the plugin settings changes
    async fn on_configuration_change(&self) -> Result<()> {
        Ok(())
    }

    /// Called after a user account was created
    async fn user_has_been_created(&self, ctx: &HookContext, user: &User) {
        let _ = (ctx, user);
    }

    /// Called after a user logged in
    async fn user_has_logged_in(&self, ctx: &HookContext, user: &User) {
        let _ = (ctx, user);
    }

    /// Handle an HTTP request routed to the plugin
    async fn serve_http(&self, ctx: &HookContext, request: &HttpRequest) -> HttpResponse {
        let _ = (ctx, request);
        HttpResponse {
            status: 404,
            headers: Default::default(),
            body: Vec::new(),
        }
    }
}

/// Events the host can deliver
#[derive(Debug, Clone)]
pub enum HookEvent {
    Activate,
    Deactivate,
    ConfigurationChange,
    UserHasBeenCreated(User),
    UserHasLoggedIn(User),
    ServeHttp(HttpRequest),
}

impl HookEvent {
    /// Name of the hook as the host knows it
    pub fn name(&self) -> &'static str {
        match self {
            HookEvent::Activate => "OnActivate",
            HookEvent::Deactivate => "OnDeactivate",
            HookEvent::ConfigurationChange => "OnConfigurationChange",
            HookEvent::UserHasBeenCreated(_) => "UserHasBeenCreated",
            HookEvent::UserHasLoggedIn(_) => "UserHasLoggedIn",
            HookEvent::ServeHttp(_) => "ServeHTTP",
        }
    }
}

/// Result of a dispatched event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    Completed,
    Http(HttpResponse),
}

/// Route an event to the matching hook
///
/// Only the lifecycle hooks can fail; user and HTTP hooks always complete.
pub async fn dispatch(hooks: &dyn Hooks, ctx: &HookContext, event: HookEvent) -> Result<HookOutcome> {
    match event {
        HookEvent::Activate => hooks.on_activate().await?,
        HookEvent::Deactivate => hooks.on_deactivate().await?,
        HookEvent::ConfigurationChange => hooks.on_configuration_change().await?,
        HookEvent::UserHasBeenCreated(user) => hooks.user_has_been_created(ctx, &user).await,
        HookEvent::UserHasLoggedIn(user) => hooks.user_has_logged_in(ctx, &user).await,
        HookEvent::ServeHttp(request) => {
            return Ok(HookOutcome::Http(hooks.serve_http(ctx, &request).await));
        }
    }
    Ok(HookOutcome::Completed)
}

/// [`dispatch`] for hosts calling from outside any async runtime
///
/// Runs on the global runtime; call [`init_runtime`](crate::runtime::init_runtime) first.
pub fn dispatch_blocking(hooks: &dyn Hooks, ctx: &HookContext, event: HookEvent) -> Result<HookOutcome> {
    crate::runtime::block_on(dispatch(hooks, ctx, event))?
}
