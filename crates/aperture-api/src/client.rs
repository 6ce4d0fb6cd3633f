//! The HTTP client handle shared by all resource modules.

use std::sync::RwLock;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Handle to the remote REST API.
///
/// Cheap to share behind an `Arc`; the bearer token is interior-mutable so a
/// session can be installed or torn down without rebuilding the client.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    bearer: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a client for the API at `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer: RwLock::new(None),
        }
    }

    /// Install or clear the session token attached to subsequent requests.
    pub fn set_bearer(&self, token: Option<String>) {
        if let Ok(mut guard) = self.bearer.write() {
            *guard = token;
        }
    }

    /// The currently installed session token, if any.
    pub fn bearer(&self) -> Option<String> {
        self.bearer.read().ok().and_then(|guard| guard.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = self.bearer() {
            req = req.bearer_auth(token);
        }
        req
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Send a request and decode the JSON body into `T`.
    pub(crate) async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Send a request where only the status matters; the body is discarded.
    pub(crate) async fn send_unit(&self, req: RequestBuilder) -> Result<()> {
        let resp = req.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        Ok(())
    }
}

/// Pull a human-readable message out of an error body.
///
/// The API is inconsistent about its error envelope (`message` vs `error`),
/// so try both before falling back to the raw body.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no error body".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}
