//! Users sub-client — profiles, portfolios, credit, profile changes.

use crate::client::SocialPredictClient;
use crate::domain::user::wire::{
    ChangePasswordRequest, DescriptionChange, DisplayNameChange, EmojiChange, LinksChange,
    Portfolio, UserCredit, UserInfo,
};
use crate::error::ApiError;
use crate::resource::{validate_password, validate_required};
use serde_json::Value;

/// Sub-client for user operations.
pub struct Users<'a> {
    pub(crate) client: &'a SocialPredictClient,
}

impl<'a> Users<'a> {
    /// Public profile for a user.
    pub async fn info(&self, username: &str) -> Result<UserInfo, ApiError> {
        self.client
            .http
            .get(&format!("/v0/userinfo/{}", username))
            .await
    }

    /// A user's spendable credit.
    pub async fn credit(&self, username: &str) -> Result<UserCredit, ApiError> {
        self.client
            .http
            .get(&format!("/v0/usercredit/{}", username))
            .await
    }

    /// A user's open positions across all markets.
    pub async fn portfolio(&self, username: &str) -> Result<Portfolio, ApiError> {
        self.client
            .http
            .get(&format!("/v0/portfolio/{}", username))
            .await
    }

    /// A user's financial summary (balance, amount in play, borrow state).
    /// Free-shape payload; consult the server docs for the current fields.
    pub async fn financial(&self, username: &str) -> Result<Value, ApiError> {
        self.client
            .http
            .get(&format!("/v0/users/{}/financial", username))
            .await
    }

    /// The authenticated user's own profile, including private fields.
    pub async fn private_profile(&self) -> Result<UserInfo, ApiError> {
        self.client.http.get("/v0/privateprofile").await
    }

    /// Change the authenticated user's password.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<Value, ApiError> {
        validate_password(current_password)?;
        validate_password(new_password)?;
        let body = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.client.http.post("/v0/changepassword", &body).await
    }

    // ── Profile changes ──────────────────────────────────────────────────

    pub async fn change_display_name(&self, display_name: &str) -> Result<Value, ApiError> {
        validate_required(&[("displayName", !display_name.is_empty())])?;
        let body = DisplayNameChange {
            display_name: display_name.to_string(),
        };
        self.client
            .http
            .post("/v0/profilechange/displayname", &body)
            .await
    }

    pub async fn change_emoji(&self, emoji: &str) -> Result<Value, ApiError> {
        validate_required(&[("emoji", !emoji.is_empty())])?;
        let body = EmojiChange {
            emoji: emoji.to_string(),
        };
        self.client.http.post("/v0/profilechange/emoji", &body).await
    }

    pub async fn change_description(&self, description: &str) -> Result<Value, ApiError> {
        validate_required(&[("description", !description.is_empty())])?;
        let body = DescriptionChange {
            description: description.to_string(),
        };
        self.client
            .http
            .post("/v0/profilechange/description", &body)
            .await
    }

    pub async fn change_links(&self, links: &LinksChange) -> Result<Value, ApiError> {
        self.client.http.post("/v0/profilechange/links", links).await
    }
}
