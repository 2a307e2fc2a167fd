//! Auth sub-client — login, logout, authentication state.

use crate::client::SocialPredictClient;
use crate::domain::auth::wire::{LoginRequest, LoginResponse};
use crate::error::ApiError;
use crate::resource::{validate_password, validate_username};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a SocialPredictClient,
}

impl<'a> Auth<'a> {
    /// Login with username and password.
    ///
    /// On success the returned token is stored in the transport, so every
    /// subsequent request carries `Authorization: Bearer <token>` until
    /// [`logout`](Self::logout) or an explicit token change.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        validate_username(username)?;
        validate_password(password)?;

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp: LoginResponse = self.client.http.post("/v0/login", &request).await?;

        self.client.http.set_token(resp.token.clone()).await;
        Ok(resp)
    }

    /// Logout — clears the in-memory token. Purely local; the server keeps
    /// no session state for bearer tokens, so no network call is made.
    pub async fn logout(&self) {
        self.client.http.clear_token().await;
    }

    /// Whether a token is currently held. Does not validate it server-side.
    pub async fn is_authenticated(&self) -> bool {
        self.client.http.has_token().await
    }
}
