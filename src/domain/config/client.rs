//! Config sub-client — home feed, site setup, stats, metrics, leaderboard.
//!
//! These endpoints return free-shape dashboard payloads whose fields change
//! with the server version, so they are surfaced as raw JSON.

use crate::client::SocialPredictClient;
use crate::domain::market::wire::LeaderboardEntry;
use crate::error::ApiError;
use serde_json::Value;

/// Sub-client for site-wide configuration and stats.
pub struct Config<'a> {
    pub(crate) client: &'a SocialPredictClient,
}

impl<'a> Config<'a> {
    /// Home feed payload.
    pub async fn home(&self) -> Result<Value, ApiError> {
        self.client.http.get("/v0/home").await
    }

    /// Site setup: economics constants, betting limits, user defaults.
    pub async fn setup(&self) -> Result<Value, ApiError> {
        self.client.http.get("/v0/setup").await
    }

    /// Aggregate site statistics.
    pub async fn stats(&self) -> Result<Value, ApiError> {
        self.client.http.get("/v0/stats").await
    }

    /// Server process metrics. Requires admin privileges on most deployments.
    pub async fn system_metrics(&self) -> Result<Value, ApiError> {
        self.client.http.get("/v0/system/metrics").await
    }

    /// Site-wide leaderboard.
    pub async fn global_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        self.client.http.get("/v0/global/leaderboard").await
    }
}
