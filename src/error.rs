//! Unified SDK error type.
//!
//! Every fallible call in the crate returns [`ApiError`]. Failures are
//! classified exactly once, at the HTTP boundary; resource methods and the
//! client re-throw them untouched, so callers branch on the classification
//! predicates instead of string-matching messages.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Machine code for local validation failures (raised before any I/O).
pub const CODE_VALIDATION: &str = "VALIDATION_ERROR";
/// Machine code for server rejections that carry no `error` field of their own.
pub const CODE_API: &str = "API_ERROR";
/// Machine code for transport-level failures (no response received).
pub const CODE_NETWORK: &str = "NETWORK_ERROR";
/// Machine code for 2xx responses whose body fails to decode.
pub const CODE_MALFORMED: &str = "MALFORMED_RESPONSE";
/// Fallback machine code.
pub const CODE_UNKNOWN: &str = "UNKNOWN_ERROR";

/// Uniform error value for every failure surfaced by the SDK.
///
/// `status_code` is the HTTP status of the server response, or `0` when no
/// response was received at all (network failure, timeout, local validation).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status_code: u16,
    pub code: String,
    pub data: Option<Value>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status_code: u16, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code,
            code: code.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// A local validation failure. Raised before any network call is made.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(message, 400, CODE_VALIDATION)
    }

    /// A transport-level failure: connection refused, DNS failure, timeout.
    pub fn network() -> Self {
        Self::new("Network error - unable to reach server", 0, CODE_NETWORK)
    }

    /// Anything unexpected at the transport boundary.
    pub fn unknown(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            "Unexpected error".to_string()
        } else {
            message
        };
        Self::new(message, 0, CODE_UNKNOWN)
    }

    /// A 2xx response whose body could not be decoded into the expected shape.
    pub fn malformed(status_code: u16, detail: impl Into<String>) -> Self {
        Self::new(
            format!("Malformed response: {}", detail.into()),
            status_code,
            CODE_MALFORMED,
        )
    }

    /// Classify a non-2xx server response.
    ///
    /// Message comes from the body's `message` field when present, the code
    /// from its `error` field; the full body is kept as `data`.
    pub fn from_response(status_code: u16, body: Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {} Error", status_code));
        let code = body
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| CODE_API.to_string());
        Self::new(message, status_code, code).with_data(body)
    }

    // ── Classification predicates ────────────────────────────────────────

    pub fn is_network_error(&self) -> bool {
        self.code == CODE_NETWORK
    }

    pub fn is_auth_error(&self) -> bool {
        self.status_code == 401 || self.status_code == 403
    }

    pub fn is_validation_error(&self) -> bool {
        self.status_code == 400
    }

    pub fn is_not_found_error(&self) -> bool {
        self.status_code == 404
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code >= 500
    }

    pub fn is_decode_error(&self) -> bool {
        self.code == CODE_MALFORMED
    }

    /// Structured form for logging/serialization.
    pub fn to_structured(&self) -> StructuredError {
        StructuredError {
            name: "ApiError",
            message: self.message.clone(),
            status_code: self.status_code,
            code: self.code.clone(),
            data: self.data.clone(),
        }
    }
}

/// Serializable snapshot of an [`ApiError`].
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StructuredError {
    pub name: &'static str,
    pub message: String,
    pub status_code: u16,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}
