//! Mattermost REST backend for the capability API
//!
//! Implements [`PluginApi`](crate::host::PluginApi) on top of the
//! Mattermost REST API v4 so the plugin can be driven by a process outside
//! the server.

mod api_impl;
mod client;
mod convert;
mod teams;
mod types;

pub use api_impl::MattermostApi;
pub use client::MattermostClient;
pub use types::*;
