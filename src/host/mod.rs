/// Host capability API and its backends
///
/// The plugin never talks to the chat server directly; everything goes
/// through the [`PluginApi`] trait.

mod api_trait;

#[cfg(test)]
pub(crate) mod fake;

pub mod mattermost;

pub use api_trait::PluginApi;
