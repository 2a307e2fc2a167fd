//! Admin sub-client — user management.

use crate::client::SocialPredictClient;
use crate::domain::admin::wire::AdminCreateUserRequest;
use crate::domain::user::wire::UserInfo;
use crate::error::ApiError;

/// Sub-client for admin operations. Requires a token with admin privileges.
pub struct Admin<'a> {
    pub(crate) client: &'a SocialPredictClient,
}

impl<'a> Admin<'a> {
    /// Create a user account.
    pub async fn create_user(
        &self,
        request: &AdminCreateUserRequest,
    ) -> Result<UserInfo, ApiError> {
        self.client.http.post("/v0/admin/createuser", request).await
    }
}
