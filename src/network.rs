//! Network URL constants for the SocialPredict SDK.

/// Default REST API base URL (a locally-running SocialPredict instance).
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
