//! User types

use serde::{Deserialize, Serialize};

/// A user as delivered with user lifecycle events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this user
    pub id: String,
    /// Username (unique login name)
    pub username: String,
    /// Email address (optional)
    pub email: Option<String>,
    /// Whether this user is a bot
    pub is_bot: bool,
}

impl User {
    /// Create a new user
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        User {
            id: id.into(),
            username: username.into(),
            email: None,
            is_bot: false,
        }
    }

    /// Set email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Mark as bot
    pub fn as_bot(mut self) -> Self {
        self.is_bot = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("user-123", "johndoe");
        assert_eq!(user.id, "user-123");
        assert_eq!(user.username, "johndoe");
        assert!(user.email.is_none());
        assert!(!user.is_bot);
    }

    #[test]
    fn test_user_builder() {
        let user = User::new("user-456", "janedoe")
            .with_email("jane@example.com")
            .as_bot();

        assert_eq!(user.email, Some("jane@example.com".to_string()));
        assert!(user.is_bot);
    }
}
