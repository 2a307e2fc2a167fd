//! Low-level HTTP transport — `SocialPredictHttp`.
//!
//! The only component in the crate that performs network I/O. Every verb
//! routes through one private `request` chokepoint with two fixed stages:
//! outbound decoration (bearer-token injection) and inbound classification
//! (translation of every failure into a single [`ApiError`]).

use crate::error::ApiError;
use crate::network::DEFAULT_API_URL;

use async_lock::RwLock;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Transport configuration, supplied once at construction.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub base_url: String,
    /// Initial bearer token, if the caller already holds one.
    pub token: Option<String>,
    pub timeout: Duration,
    /// Extra default headers sent on every request.
    pub headers: Vec<(String, String)>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout: Duration::from_millis(10_000),
            headers: Vec::new(),
        }
    }
}

/// Low-level HTTP transport for the SocialPredict REST API.
pub struct SocialPredictHttp {
    base_url: String,
    client: Client,
    /// The configured default headers already carry an `Authorization` entry,
    /// so bearer injection is skipped for every request.
    auth_overridden: bool,
    /// Bearer token shared by all clones of this transport.
    auth_token: Arc<RwLock<Option<String>>>,
}

impl SocialPredictHttp {
    pub fn new(config: HttpConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        let mut auth_overridden = false;
        for (name, value) in &config.headers {
            let name: HeaderName = name
                .parse()
                .map_err(|_| ApiError::validation(format!("Invalid header name: {}", name)))?;
            let value: HeaderValue = value
                .parse()
                .map_err(|_| ApiError::validation(format!("Invalid header value for {}", name)))?;
            if name == AUTHORIZATION {
                auth_overridden = true;
            }
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::unknown(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            auth_overridden,
            auth_token: Arc::new(RwLock::new(config.token)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Token management (no I/O) ────────────────────────────────────────

    pub async fn set_token(&self, token: impl Into<String>) {
        *self.auth_token.write().await = Some(token.into());
    }

    pub async fn clear_token(&self) {
        *self.auth_token.write().await = None;
    }

    pub async fn token(&self) -> Option<String> {
        self.auth_token.read().await.clone()
    }

    pub async fn has_token(&self) -> bool {
        self.auth_token.read().await.is_some()
    }

    // ── Verb methods ─────────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, None::<&()>).await
    }

    // ── Chokepoint ───────────────────────────────────────────────────────

    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, url = %url, "issuing request");

        let mut req = self.client.request(method, &url);

        // Outbound decoration: bearer injection, unless the caller pinned an
        // explicit Authorization header at construction. The token is read at
        // send time, so in-flight requests keep the value they captured.
        if !self.auth_overridden {
            if let Some(token) = self.auth_token.read().await.as_ref() {
                req = req.header(AUTHORIZATION, format!("Bearer {}", token));
            }
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        // Inbound classification: exactly one ApiError per failed call.
        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => return Err(classify_transport_error(e)),
        };

        let status = resp.status();
        if status.is_success() {
            let bytes = resp.bytes().await.map_err(classify_transport_error)?;
            return serde_json::from_slice(&bytes).map_err(|e| {
                tracing::debug!(status = status.as_u16(), error = %e, "undecodable 2xx body");
                ApiError::malformed(status.as_u16(), e.to_string())
            });
        }

        let status_code = status.as_u16();
        let text = resp.text().await.unwrap_or_default();
        let payload: Value = serde_json::from_str(&text).unwrap_or(Value::String(text));
        tracing::debug!(status = status_code, "request rejected by server");
        Err(ApiError::from_response(status_code, payload))
    }
}

impl Clone for SocialPredictHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            auth_overridden: self.auth_overridden,
            auth_token: self.auth_token.clone(),
        }
    }
}

/// Map a reqwest send/read failure onto the error taxonomy. Timeouts are a
/// subtype of NETWORK_ERROR: no response reached the caller either way.
fn classify_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() || err.is_connect() {
        tracing::debug!(error = %err, "transport failure, no response received");
        ApiError::network()
    } else {
        ApiError::unknown(err.to_string())
    }
}
