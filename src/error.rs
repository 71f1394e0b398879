//! Error handling for the autojoin plugin
//!
//! Errors carry an [`ErrorCode`] category plus whatever context the host
//! returned (Mattermost error ID, request ID, HTTP status).

use std::fmt;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Generic/unknown error
    Unknown,
    /// Invalid argument provided
    InvalidArgument,
    /// Network error talking to the host
    NetworkError,
    /// Authentication failed
    AuthenticationFailed,
    /// Resource not found
    NotFound,
    /// Permission denied
    PermissionDenied,
    /// Invalid state for operation
    InvalidState,
    /// Plugin settings could not be parsed
    InvalidConfiguration,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::InvalidArgument => "Invalid argument",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::AuthenticationFailed => "Authentication failed",
            ErrorCode::NotFound => "Not found",
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::InvalidState => "Invalid state",
            ErrorCode::InvalidConfiguration => "Invalid configuration",
        }
    }

    /// Map an HTTP status returned by the host to an error category
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => ErrorCode::InvalidArgument,
            401 => ErrorCode::AuthenticationFailed,
            403 => ErrorCode::PermissionDenied,
            404 => ErrorCode::NotFound,
            _ => ErrorCode::NetworkError,
        }
    }
}

/// Internal error type
#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    /// Platform-specific error ID (e.g., Mattermost error ID like "app.team.get_by_name.missing.app_error")
    pub(crate) mattermost_error_id: Option<String>,
    /// Request ID from the host for debugging
    pub(crate) request_id: Option<String>,
    /// HTTP status code if this error came from an HTTP response
    pub(crate) http_status: Option<u16>,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Error {
            code,
            message: message.into(),
            mattermost_error_id: None,
            request_id: None,
            http_status: None,
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::new(ErrorCode::InvalidArgument, msg)
    }

    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Error::new(ErrorCode::InvalidConfiguration, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::new(ErrorCode::NotFound, msg)
    }

    /// Add Mattermost-specific error ID (builder pattern)
    pub fn with_mattermost_error_id(mut self, id: String) -> Self {
        self.mattermost_error_id = Some(id);
        self
    }

    /// Add request ID for debugging (builder pattern)
    pub fn with_request_id(mut self, id: String) -> Self {
        self.request_id = Some(id);
        self
    }

    /// Add HTTP status code (builder pattern)
    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Get the Mattermost error ID if available
    pub fn mattermost_error_id(&self) -> Option<&str> {
        self.mattermost_error_id.as_deref()
    }

    /// Get the request ID if available
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Get the HTTP status code if available
    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::invalid_configuration(format!("Failed to parse plugin settings: {e}"))
    }
}
