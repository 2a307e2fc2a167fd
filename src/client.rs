//! High-level client — `SocialPredictClient` with nested sub-client accessors.
//!
//! Each resource group has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared transport, and the token
//! passthroughs.

use crate::domain::admin::client::Admin;
use crate::domain::auth::client::Auth;
use crate::domain::betting::client::Betting;
use crate::domain::config::client::Config;
use crate::domain::market::client::Markets;
use crate::domain::user::client::Users;
use crate::error::ApiError;
use crate::http::{HttpConfig, SocialPredictHttp};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::admin::client::Admin as AdminClient;
pub use crate::domain::auth::client::Auth as AuthClient;
pub use crate::domain::betting::client::Betting as BettingClient;
pub use crate::domain::config::client::Config as ConfigClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::user::client::Users as UsersClient;

/// The primary entry point for the SocialPredict SDK.
///
/// Provides nested sub-client accessors for each resource group:
/// `client.markets()`, `client.betting()`, etc. All sub-clients share one
/// transport, and with it one bearer token. Construction performs no I/O.
pub struct SocialPredictClient {
    pub(crate) http: SocialPredictHttp,
}

impl SocialPredictClient {
    pub fn builder() -> SocialPredictClientBuilder {
        SocialPredictClientBuilder::default()
    }

    /// A client against the default local server with default settings.
    pub fn new() -> Result<Self, ApiError> {
        Self::builder().build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn betting(&self) -> Betting<'_> {
        Betting { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn config(&self) -> Config<'_> {
        Config { client: self }
    }

    pub fn admin(&self) -> Admin<'_> {
        Admin { client: self }
    }

    // ── Token passthroughs ───────────────────────────────────────────────

    pub async fn set_token(&self, token: impl Into<String>) {
        self.http.set_token(token).await;
    }

    pub async fn clear_token(&self) {
        self.http.clear_token().await;
    }

    pub async fn token(&self) -> Option<String> {
        self.http.token().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.http.has_token().await
    }

    /// The low-level transport, for endpoints not yet mapped by a sub-client.
    pub fn http(&self) -> &SocialPredictHttp {
        &self.http
    }
}

impl Clone for SocialPredictClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct SocialPredictClientBuilder {
    config: HttpConfig,
}

impl SocialPredictClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.config.base_url = url.to_string();
        self
    }

    /// Pre-set a bearer token on construction.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    /// Per-request timeout. Defaults to 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header sent on every request. Supplying an
    /// `Authorization` header here disables bearer-token injection.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<SocialPredictClient, ApiError> {
        Ok(SocialPredictClient {
            http: SocialPredictHttp::new(self.config)?,
        })
    }
}
