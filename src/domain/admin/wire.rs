//! Wire types for admin requests (REST).

use crate::error::ApiError;
use crate::resource::{validate_email, validate_required, validate_username};
use serde::Serialize;

/// Body for `POST /v0/admin/createuser`. Construct via
/// [`AdminCreateUserRequest::builder`], which reports the full set of missing
/// required fields in one failure and applies the username/email rules.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminCreateUserRequest {
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub password: String,
    pub user_type: String,
}

impl AdminCreateUserRequest {
    pub fn builder() -> AdminCreateUserRequestBuilder {
        AdminCreateUserRequestBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdminCreateUserRequestBuilder {
    username: Option<String>,
    display_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    user_type: Option<String>,
}

impl AdminCreateUserRequestBuilder {
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn user_type(mut self, user_type: impl Into<String>) -> Self {
        self.user_type = Some(user_type.into());
        self
    }

    pub fn build(self) -> Result<AdminCreateUserRequest, ApiError> {
        validate_required(&[
            ("username", self.username.is_some()),
            ("displayName", self.display_name.is_some()),
            ("email", self.email.is_some()),
            ("password", self.password.is_some()),
            ("userType", self.user_type.is_some()),
        ])?;
        let username = self.username.unwrap();
        let email = self.email.unwrap();
        validate_username(&username)?;
        validate_email(&email)?;
        Ok(AdminCreateUserRequest {
            username,
            display_name: self.display_name.unwrap(),
            email,
            password: self.password.unwrap(),
            user_type: self.user_type.unwrap(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_builder() -> AdminCreateUserRequestBuilder {
        AdminCreateUserRequest::builder()
            .username("newuser")
            .display_name("New User")
            .email("new@example.com")
            .password("hunter2")
            .user_type("REGULAR")
    }

    #[test]
    fn test_builder_reports_missing_fields_in_order() {
        let err = AdminCreateUserRequest::builder()
            .username("newuser")
            .password("hunter2")
            .build()
            .unwrap_err();
        assert_eq!(
            err.message,
            "Missing required parameters: displayName, email, userType"
        );
    }

    #[test]
    fn test_builder_rejects_bad_email() {
        let err = full_builder().email("not-an-address").build().unwrap_err();
        assert_eq!(err.message, "Invalid email address");
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_builder_rejects_short_username() {
        let err = full_builder().username("ab").build().unwrap_err();
        assert_eq!(err.message, "Username must be between 3 and 30 characters");
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let req = full_builder().build().unwrap();
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["displayName"], "New User");
        assert_eq!(value["userType"], "REGULAR");
    }
}
