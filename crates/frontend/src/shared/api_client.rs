//! HTTP client shared by the pages.
//!
//! Built once at startup from [`ClientConfig`](super::config::ClientConfig)
//! and handed to components through Leptos context. Every request carries the
//! bearer token from localStorage; a 401 clears the token and redirects to
//! the login page.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::system::auth::{guard, storage};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Session expired, please log in again")]
    Unauthorized,
    #[error("You are not allowed to access this feature.")]
    Forbidden,
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Supplies the access token for the `Authorization` header
pub type TokenSource = fn() -> Option<String>;

/// Called when the backend answers 401
pub type UnauthorizedHook = fn();

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token_source: TokenSource,
    on_unauthorized: UnauthorizedHook,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token_source: storage::get_access_token,
            on_unauthorized: guard::on_unauthorized,
        }
    }

    #[cfg(test)]
    fn with_token_source(mut self, token_source: TokenSource) -> Self {
        self.token_source = token_source;
        self
    }

    /// Full URL for an API path
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn auth_header(&self) -> Option<String> {
        (self.token_source)().map(|token| format!("Bearer {}", token))
    }

    /// GET a JSON document
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let mut request = Request::get(&url).header("Accept", "application/json");
        if let Some(auth) = self.auth_header() {
            request = request.header("Authorization", &auth);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if let Some(err) = classify_status(response.status()) {
            if err == ApiError::Unauthorized {
                (self.on_unauthorized)();
            }
            return Err(err);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Map a response status to an error, `None` for 2xx
pub fn classify_status(status: u16) -> Option<ApiError> {
    match status {
        200..=299 => None,
        401 => Some(ApiError::Unauthorized),
        403 => Some(ApiError::Forbidden),
        other => Some(ApiError::Status(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_token() -> Option<String> {
        None
    }

    fn fixed_token() -> Option<String> {
        Some("abc".to_string())
    }

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://yard:3000").with_token_source(no_token);
        assert_eq!(client.url("/goods/heatmap"), "http://yard:3000/goods/heatmap");
        assert_eq!(client.url("goods/heatmap"), "http://yard:3000/goods/heatmap");
    }

    #[test]
    fn test_auth_header_from_token_source() {
        let client = ApiClient::new("").with_token_source(fixed_token);
        assert_eq!(client.auth_header().as_deref(), Some("Bearer abc"));
        let anonymous = client.with_token_source(no_token);
        assert_eq!(anonymous.auth_header(), None);
    }

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(200), None);
        assert_eq!(classify_status(204), None);
        assert_eq!(classify_status(401), Some(ApiError::Unauthorized));
        assert_eq!(classify_status(403), Some(ApiError::Forbidden));
        assert_eq!(classify_status(502), Some(ApiError::Status(502)));
        assert_eq!(
            ApiError::Forbidden.to_string(),
            "You are not allowed to access this feature."
        );
    }
}
