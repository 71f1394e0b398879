use reqwest::Client;
use std::sync::Arc;
use tokio::sync::RwLock;
use url::Url;

use crate::error::{Error, ErrorCode, Result};

use super::types::MattermostErrorResponse;

/// Thin REST client for the Mattermost API v4
pub struct MattermostClient {
    /// HTTP client for REST API calls
    http_client: Client,
    /// Base URL for the Mattermost server (e.g., "https://mattermost.example.com")
    base_url: Url,
    /// Bot or personal access token
    token: Arc<RwLock<Option<String>>>,
}

impl MattermostClient {
    /// Create a new Mattermost client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the Mattermost server (e.g., "https://mattermost.example.com")
    ///
    /// # Returns
    /// A Result containing the MattermostClient or an Error
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::new(ErrorCode::InvalidArgument, format!("Invalid URL: {e}")))?;

        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| Error::new(ErrorCode::NetworkError, format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Set the authentication token
    pub async fn set_token(&self, token: String) {
        let mut t = self.token.write().await;
        *t = Some(token);
    }

    /// Get the current authentication token
    pub async fn get_token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Build the full API URL for a list of path segments
    ///
    /// Each segment is percent-encoded on its own, so IDs and names can never
    /// add path components, a query or a fragment.
    ///
    /// # Arguments
    /// * `segments` - Path below `/api/v4` (e.g., `["teams", "name", "town"]`)
    ///
    /// # Errors
    /// `ErrorCode::InvalidArgument` for an empty, `.` or `..` segment
    pub fn api_url(&self, segments: &[&str]) -> Result<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(Error::invalid_argument(format!("Invalid path segment: {bad:?}")));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::invalid_argument("Server URL cannot be a base"))?
            .pop_if_empty()
            .extend(["api", "v4"])
            .extend(segments);
        Ok(url)
    }

    /// Make a GET request to the Mattermost API
    pub async fn get(&self, segments: &[&str]) -> Result<reqwest::Response> {
        let url = self.api_url(segments)?;
        let mut request = self.http_client.get(url);

        if let Some(token) = self.get_token().await {
            request = request.bearer_auth(token);
        }

        request
            .send()
            .await
            .map_err(|e| Error::new(ErrorCode::NetworkError, format!("GET request failed: {e}")))
    }

    /// Make a POST request to the Mattermost API
    ///
    /// # Arguments
    /// * `segments` - Path below `/api/v4`
    /// * `body` - The request body (will be serialized to JSON)
    pub async fn post<T: serde::Serialize>(&self, segments: &[&str], body: &T) -> Result<reqwest::Response> {
        let url = self.api_url(segments)?;
        let mut request = self.http_client.post(url);

        if let Some(token) = self.get_token().await {
            request = request.bearer_auth(token);
        }

        request
            .json(body)
            .send()
            .await
            .map_err(|e| Error::new(ErrorCode::NetworkError, format!("POST request failed: {e}")))
    }

    /// Check if the response is successful and extract the JSON body
    ///
    /// Error bodies are decoded as Mattermost app errors when possible so
    /// the returned Error carries the server's error ID and request ID.
    pub async fn handle_response<T: serde::de::DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| Error::new(ErrorCode::Unknown, format!("Failed to parse response: {e}")));
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(api_error(status.as_u16(), &error_text))
    }
}

/// Build an Error from a non-success status and its body
pub(crate) fn api_error(status: u16, body: &str) -> Error {
    let code = ErrorCode::from_http_status(status);

    match serde_json::from_str::<MattermostErrorResponse>(body) {
        Ok(app_error) => {
            let mut error = Error::new(code, app_error.message)
                .with_mattermost_error_id(app_error.id)
                .with_http_status(status);
            if !app_error.request_id.is_empty() {
                error = error.with_request_id(app_error.request_id);
            }
            error
        }
        Err(_) => Error::new(code, format!("API request failed with status {status}: {body}"))
            .with_http_status(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client() {
        let client = MattermostClient::new("https://mattermost.example.com");
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let client = MattermostClient::new("not a url");
        assert!(client.is_err());
    }

    #[test]
    fn test_api_url() {
        let client = MattermostClient::new("https://mattermost.example.com/").unwrap();
        assert_eq!(
            client.api_url(&["teams", "name", "town"]).unwrap().as_str(),
            "https://mattermost.example.com/api/v4/teams/name/town"
        );

        let client = MattermostClient::new("https://example.com/chat").unwrap();
        assert_eq!(
            client.api_url(&["users", "u1", "teams", "members"]).unwrap().as_str(),
            "https://example.com/chat/api/v4/users/u1/teams/members"
        );
    }

    #[test]
    fn test_api_url_escapes_segments() {
        let client = MattermostClient::new("https://mattermost.example.com").unwrap();

        let url = client.api_url(&["teams", "name", "town?x=1"]).unwrap();
        assert_eq!(url.path(), "/api/v4/teams/name/town%3Fx=1");
        assert_eq!(url.query(), None);

        let url = client.api_url(&["teams", "name", "town#frag"]).unwrap();
        assert_eq!(url.path(), "/api/v4/teams/name/town%23frag");
        assert_eq!(url.fragment(), None);

        let url = client.api_url(&["teams", "name", "../../teams/abc123"]).unwrap();
        assert_eq!(url.path(), "/api/v4/teams/name/..%2F..%2Fteams%2Fabc123");
    }

    #[test]
    fn test_api_url_rejects_dot_segments() {
        let client = MattermostClient::new("https://mattermost.example.com").unwrap();
        for bad in ["", ".", ".."] {
            let err = client.api_url(&["teams", "name", bad]).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidArgument);
        }
    }

    #[tokio::test]
    async fn test_token_management() {
        let client = MattermostClient::new("https://mattermost.example.com").unwrap();

        assert!(client.get_token().await.is_none());

        client.set_token("bot_token".to_string()).await;
        assert_eq!(client.get_token().await, Some("bot_token".to_string()));
    }

    #[test]
    fn test_api_error_from_app_error_body() {
        let body = r#"{
            "id": "app.team.get_by_name.missing.app_error",
            "message": "Unable to find the existing team.",
            "request_id": "req-9",
            "status_code": 404
        }"#;

        let error = api_error(404, body);
        assert_eq!(error.code, ErrorCode::NotFound);
        assert_eq!(error.message, "Unable to find the existing team.");
        assert_eq!(
            error.mattermost_error_id(),
            Some("app.team.get_by_name.missing.app_error")
        );
        assert_eq!(error.request_id(), Some("req-9"));
        assert_eq!(error.http_status(), Some(404));
    }

    #[test]
    fn test_api_error_from_plain_body() {
        let error = api_error(502, "Bad Gateway");
        assert_eq!(error.code, ErrorCode::NetworkError);
        assert!(error.message.contains("502"));
        assert_eq!(error.mattermost_error_id(), None);
        assert_eq!(error.http_status(), Some(502));
    }
}
