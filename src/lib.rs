//! Mattermost auto-join plugin
//!
//! Adds every user who signs up or logs in to one configured team. The host
//! drives the plugin through the [`Hooks`] interface and the plugin talks
//! back through the [`PluginApi`] capability trait.
//!
//! ```no_run
//! use std::sync::Arc;
//! use autojoin::{dispatch, HookContext, HookEvent, MattermostApi, Plugin, User};
//!
//! # async fn run() -> autojoin::Result<()> {
//! let api = MattermostApi::new("https://chat.example.com", serde_json::json!({ "TeamName": "town" }))?;
//! api.set_token("bot-token").await;
//!
//! let plugin = Plugin::new(Arc::new(api));
//! let ctx = HookContext::new();
//! dispatch(&plugin, &ctx, HookEvent::Activate).await?;
//! dispatch(&plugin, &ctx, HookEvent::UserHasLoggedIn(User::new("user-id", "alice"))).await?;
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod configuration;
pub mod context;
pub mod enrollment;
pub mod error;
pub mod hooks;
pub mod host;
pub mod http;
pub mod plugin;
pub mod runtime;
pub mod types;

// Re-exports for convenience
pub use configuration::Configuration;
pub use context::{HookContext, LogCallback, LogLevel};
pub use enrollment::{EnrollmentOutcome, MEMBERSHIP_PAGE_SIZE};
pub use error::{Error, ErrorCode, Result};
pub use hooks::{dispatch, dispatch_blocking, HookEvent, HookOutcome, Hooks};
pub use host::mattermost::MattermostApi;
pub use host::PluginApi;
pub use http::{HttpRequest, HttpResponse};
pub use plugin::{Plugin, PluginState};
pub use types::{Team, TeamMember, TeamType, User};

// Library version information
pub const VERSION_STRING: &str = concat!(env!("CARGO_PKG_VERSION"), " (autojoin)");
