//! Per-invocation context and log levels
//!
//! The host attaches a [`HookContext`] to every user-facing hook call. The
//! plugin only uses it to tag log records with the originating request.

use std::sync::Arc;

/// Log levels understood by the host logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Callback receiving a formatted log line
pub type LogCallback = Arc<dyn Fn(LogLevel, &str) + Send + Sync>;

/// Render a message and its key/value fields as one line
///
/// `msg key=value key=value`
pub fn format_record(message: &str, fields: &[(&str, &str)]) -> String {
    let mut line = message.to_string();
    for (key, value) in fields {
        line.push(' ');
        line.push_str(key);
        line.push('=');
        line.push_str(value);
    }
    line
}

/// Metadata about the host request that triggered a hook
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookContext {
    pub session_id: String,
    pub request_id: String,
    pub ip_address: String,
    pub accept_language: String,
    pub user_agent: String,
}

impl HookContext {
    pub fn new() -> Self {
        HookContext::default()
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = ip_address.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record() {
        assert_eq!(format_record("hello", &[]), "hello");
        assert_eq!(
            format_record("Failed", &[("user_id", "u1"), ("page", "2")]),
            "Failed user_id=u1 page=2"
        );
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Error > LogLevel::Warning);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::Warning.as_str(), "warn");
    }

    #[test]
    fn test_context_builder() {
        let ctx = HookContext::new()
            .with_request_id("req-1")
            .with_session_id("sess-1")
            .with_ip_address("10.0.0.1");
        assert_eq!(ctx.request_id, "req-1");
        assert_eq!(ctx.session_id, "sess-1");
        assert_eq!(ctx.ip_address, "10.0.0.1");
        assert!(ctx.user_agent.is_empty());
    }
}
