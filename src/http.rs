//! Minimal HTTP surface forwarded by the host
//!
//! The host routes requests under the plugin's URL prefix to
//! [`Hooks::serve_http`](crate::hooks::Hooks::serve_http). The plugin serves
//! a single unauthenticated greeting.

use std::collections::HashMap;

/// Body served for every request
pub const GREETING: &str = "Hello, world!";

/// A request forwarded by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    /// Path relative to the plugin's URL prefix
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        HttpRequest {
            method: method.into(),
            path: path.into(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// A response handed back to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// 200 response with a plain text body
    pub fn text(body: impl Into<String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            "text/plain; charset=utf-8".to_string(),
        );
        HttpResponse {
            status: 200,
            headers,
            body: body.into().into_bytes(),
        }
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Answer any request with the greeting
pub fn greet(_request: &HttpRequest) -> HttpResponse {
    HttpResponse::text(GREETING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_for_any_path() {
        for (method, path) in [("GET", "/"), ("POST", "/anything"), ("DELETE", "/x/y")] {
            let response = greet(&HttpRequest::new(method, path));
            assert_eq!(response.status, 200);
            assert_eq!(response.body_text(), "Hello, world!");
        }
    }

    #[test]
    fn test_response_content_type() {
        let response = greet(&HttpRequest::new("GET", "/").with_header("Accept", "*/*"));
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("text/plain; charset=utf-8")
        );
    }
}
