//! Shared conventions applied by every resource group: required-field
//! validation, query-string construction, date normalization, and the
//! field-specific business rules the API enforces client-side.

use crate::error::ApiError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Check a declared set of required fields, reporting the full missing set
/// in declaration order in a single failure.
pub fn validate_required(fields: &[(&'static str, bool)]) -> Result<(), ApiError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation(format!(
            "Missing required parameters: {}",
            missing.join(", ")
        )))
    }
}

/// Build a query string from ordered key/value pairs, omitting absent values.
/// Values are percent-encoded; keys are assumed to be plain identifiers.
/// Returns an empty string when no value is present.
pub fn build_query(params: &[(&str, Option<&str>)]) -> String {
    params
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// An outbound date field: either a concrete instant, rendered as an
/// ISO-8601 UTC timestamp with millisecond precision, or a pre-formatted
/// string passed through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum DateParam {
    Instant(DateTime<Utc>),
    Raw(String),
}

impl DateParam {
    /// The exact string sent on the wire.
    pub fn to_wire(&self) -> String {
        match self {
            DateParam::Instant(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
            DateParam::Raw(s) => s.clone(),
        }
    }
}

impl Serialize for DateParam {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl From<DateTime<Utc>> for DateParam {
    fn from(dt: DateTime<Utc>) -> Self {
        DateParam::Instant(dt)
    }
}

impl From<String> for DateParam {
    fn from(s: String) -> Self {
        DateParam::Raw(s)
    }
}

impl From<&str> for DateParam {
    fn from(s: &str) -> Self {
        DateParam::Raw(s.to_string())
    }
}

// ── Field rules ──────────────────────────────────────────────────────────

/// Usernames are 3–30 characters everywhere the API accepts one.
pub fn validate_username(username: &str) -> Result<(), ApiError> {
    let chars = username.chars().count();
    if chars < 3 || chars > 30 {
        return Err(ApiError::validation(
            "Username must be between 3 and 30 characters",
        ));
    }
    Ok(())
}

/// Passwords may not be empty.
pub fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.is_empty() {
        return Err(ApiError::validation(
            "Password must be at least 1 character",
        ));
    }
    Ok(())
}

/// Shallow shape check: one `@`, non-empty local part, dotted domain.
/// Full address validation belongs to the server.
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ApiError::validation("Invalid email address"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_validate_required_reports_full_missing_set_in_order() {
        let err = validate_required(&[
            ("questionTitle", false),
            ("description", true),
            ("outcomeType", false),
            ("resolutionDateTime", false),
        ])
        .unwrap_err();
        assert_eq!(
            err.message,
            "Missing required parameters: questionTitle, outcomeType, resolutionDateTime"
        );
        assert!(err.is_validation_error());
        assert_eq!(err.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_validate_required_passes_when_all_present() {
        assert!(validate_required(&[("a", true), ("b", true)]).is_ok());
    }

    #[test]
    fn test_build_query_skips_absent_and_encodes() {
        let q = build_query(&[
            ("q", Some("will it rain?")),
            ("limit", None),
            ("page", Some("2")),
        ]);
        assert_eq!(q, "q=will%20it%20rain%3F&page=2");
    }

    #[test]
    fn test_build_query_empty() {
        assert_eq!(build_query(&[("a", None)]), "");
    }

    #[test]
    fn test_date_param_instant_renders_iso_millis_utc() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let param = DateParam::from(dt);
        assert_eq!(param.to_wire(), "2026-03-14T09:26:53.000Z");
    }

    #[test]
    fn test_date_param_raw_passes_through() {
        let param = DateParam::from("2026-03-14T09:26:53Z");
        assert_eq!(param.to_wire(), "2026-03-14T09:26:53Z");
    }

    #[test]
    fn test_username_bounds() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username("abc").is_ok());
        assert!(validate_username(&"x".repeat(30)).is_ok());
        assert!(validate_username(&"x".repeat(31)).is_err());
    }

    #[test]
    fn test_username_bounds_count_characters_not_bytes() {
        // Two characters, six bytes.
        assert!(validate_username("日本").is_err());
        assert!(validate_username("日本語").is_ok());
        // Sixteen characters, thirty-two bytes.
        assert!(validate_username(&"é".repeat(16)).is_ok());
        assert!(validate_username(&"é".repeat(31)).is_err());
    }

    #[test]
    fn test_password_nonempty() {
        assert!(validate_password("").is_err());
        assert!(validate_password("x").is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user@example").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@@example.com").is_err());
        assert!(validate_email("user example@foo.com").is_err());
        assert!(validate_email("no-at-sign").is_err());
    }
}
