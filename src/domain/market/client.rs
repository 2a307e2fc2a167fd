//! Markets sub-client — listing, search, projections, creation, resolution.

use crate::client::SocialPredictClient;
use crate::domain::market::wire::{
    Bet, CreateMarketRequest, LeaderboardEntry, Market, MarketDetail, MarketPosition,
    MarketsResponse, ProjectionResponse, ResolveRequest,
};
use crate::error::ApiError;
use crate::resource::{build_query, validate_required};
use rust_decimal::Decimal;
use serde_json::Value;

/// Sub-client for market operations.
pub struct Markets<'a> {
    pub(crate) client: &'a SocialPredictClient,
}

impl<'a> Markets<'a> {
    /// All markets.
    pub async fn all(&self) -> Result<MarketsResponse, ApiError> {
        self.client.http.get("/v0/markets").await
    }

    /// Markets still open for betting.
    pub async fn active(&self) -> Result<MarketsResponse, ApiError> {
        self.client.http.get("/v0/markets/active").await
    }

    /// Markets past their resolution date but not yet resolved.
    pub async fn closed(&self) -> Result<MarketsResponse, ApiError> {
        self.client.http.get("/v0/markets/closed").await
    }

    /// Resolved markets.
    pub async fn resolved(&self) -> Result<MarketsResponse, ApiError> {
        self.client.http.get("/v0/markets/resolved").await
    }

    /// Full-text search over market titles and descriptions.
    pub async fn search(&self, query: &str) -> Result<MarketsResponse, ApiError> {
        validate_required(&[("q", !query.is_empty())])?;
        let qs = build_query(&[("q", Some(query))]);
        self.client
            .http
            .get(&format!("/v0/markets/search?{}", qs))
            .await
    }

    /// A single market with aggregates and probability history.
    pub async fn get(&self, market_id: i64) -> Result<MarketDetail, ApiError> {
        self.client
            .http
            .get(&format!("/v0/markets/{}", market_id))
            .await
    }

    /// Probability the market would move to if `amount` were bet on `outcome`.
    pub async fn projection(
        &self,
        market_id: i64,
        amount: Decimal,
        outcome: &str,
    ) -> Result<ProjectionResponse, ApiError> {
        if amount <= Decimal::ZERO {
            return Err(ApiError::validation("Bet amount must be greater than 0"));
        }
        // Trailing slash is part of the route.
        self.client
            .http
            .get(&format!(
                "/v0/marketprojection/{}/{}/{}/",
                market_id,
                amount,
                urlencoding::encode(outcome)
            ))
            .await
    }

    /// All bets placed on a market.
    pub async fn bets(&self, market_id: i64) -> Result<Vec<Bet>, ApiError> {
        self.client
            .http
            .get(&format!("/v0/markets/bets/{}", market_id))
            .await
    }

    /// All user positions on a market.
    pub async fn positions(&self, market_id: i64) -> Result<Vec<MarketPosition>, ApiError> {
        self.client
            .http
            .get(&format!("/v0/markets/positions/{}", market_id))
            .await
    }

    /// One user's position on a market.
    pub async fn user_position(
        &self,
        market_id: i64,
        username: &str,
    ) -> Result<MarketPosition, ApiError> {
        self.client
            .http
            .get(&format!("/v0/markets/positions/{}/{}", market_id, username))
            .await
    }

    /// Per-market leaderboard.
    pub async fn leaderboard(&self, market_id: i64) -> Result<Vec<LeaderboardEntry>, ApiError> {
        self.client
            .http
            .get(&format!("/v0/markets/leaderboard/{}", market_id))
            .await
    }

    /// Create a market. Requires an authenticated client.
    pub async fn create(&self, request: &CreateMarketRequest) -> Result<Market, ApiError> {
        self.client.http.post("/v0/create", request).await
    }

    /// Resolve a market to `resolution_result` (e.g. "YES" / "NO").
    /// Only the market creator may resolve.
    pub async fn resolve(
        &self,
        market_id: i64,
        resolution_result: &str,
    ) -> Result<Value, ApiError> {
        validate_required(&[("resolutionResult", !resolution_result.is_empty())])?;
        let body = ResolveRequest {
            resolution_result: resolution_result.to_string(),
        };
        self.client
            .http
            .post(&format!("/v0/resolve/{}", market_id), &body)
            .await
    }
}
