//! Wire types for market responses (REST).

use crate::domain::user::wire::UserInfo;
use crate::error::ApiError;
use crate::resource::{validate_required, DateParam};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Market ─────────────────────────────────────────────────────────────────

/// A market record as the backend stores it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub id: i64,
    pub question_title: String,
    #[serde(default)]
    pub description: String,
    pub outcome_type: String,
    pub resolution_date_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_resolution_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_resolved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_result: Option<String>,
    pub initial_probability: Decimal,
    pub creator_username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// List response for the market index endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketsResponse {
    pub markets: Vec<MarketOverview>,
}

/// A market plus the aggregates the index endpoints attach to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketOverview {
    pub market: Market,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<UserInfo>,
    pub last_probability: Decimal,
    pub num_users: i64,
    pub total_volume: Decimal,
}

/// Detail response for `GET /v0/markets/{marketId}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketDetail {
    pub market: Market,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<UserInfo>,
    #[serde(default)]
    pub probability_changes: Vec<ProbabilityPoint>,
    pub num_users: i64,
    pub total_volume: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilityPoint {
    pub probability: Decimal,
    pub timestamp: DateTime<Utc>,
}

// ─── Bets, positions, leaderboard ───────────────────────────────────────────

/// A single bet on a market.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    pub market_id: i64,
    pub amount: Decimal,
    pub outcome: String,
    pub placed_at: DateTime<Utc>,
}

/// A user's share holdings on one market.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketPosition {
    pub username: String,
    pub yes_shares_owned: Decimal,
    pub no_shares_owned: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub username: String,
    pub profit: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Decimal>,
}

/// Response for `GET /v0/marketprojection/{marketId}/{amount}/{outcome}/` —
/// the probability the market would move to if the bet were placed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub projected_probability: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_shares: Option<Decimal>,
}

// ─── Create / resolve requests ──────────────────────────────────────────────

/// Body for `POST /v0/create`. Construct via [`CreateMarketRequest::builder`],
/// which reports the full set of missing required fields in one failure.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateMarketRequest {
    pub question_title: String,
    pub description: String,
    pub outcome_type: String,
    pub resolution_date_time: DateParam,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_probability: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

impl CreateMarketRequest {
    pub fn builder() -> CreateMarketRequestBuilder {
        CreateMarketRequestBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateMarketRequestBuilder {
    question_title: Option<String>,
    description: Option<String>,
    outcome_type: Option<String>,
    resolution_date_time: Option<DateParam>,
    initial_probability: Option<Decimal>,
    is_public: Option<bool>,
}

impl CreateMarketRequestBuilder {
    pub fn question_title(mut self, title: impl Into<String>) -> Self {
        self.question_title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn outcome_type(mut self, outcome_type: impl Into<String>) -> Self {
        self.outcome_type = Some(outcome_type.into());
        self
    }

    /// Accepts a `DateTime<Utc>` (rendered as ISO-8601 UTC with millisecond
    /// precision) or a pre-formatted string passed through unchanged.
    pub fn resolution_date_time(mut self, date: impl Into<DateParam>) -> Self {
        self.resolution_date_time = Some(date.into());
        self
    }

    pub fn initial_probability(mut self, probability: Decimal) -> Self {
        self.initial_probability = Some(probability);
        self
    }

    pub fn is_public(mut self, public: bool) -> Self {
        self.is_public = Some(public);
        self
    }

    pub fn build(self) -> Result<CreateMarketRequest, ApiError> {
        validate_required(&[
            ("questionTitle", self.question_title.is_some()),
            ("description", self.description.is_some()),
            ("outcomeType", self.outcome_type.is_some()),
            ("resolutionDateTime", self.resolution_date_time.is_some()),
        ])?;
        Ok(CreateMarketRequest {
            question_title: self.question_title.unwrap(),
            description: self.description.unwrap(),
            outcome_type: self.outcome_type.unwrap(),
            resolution_date_time: self.resolution_date_time.unwrap(),
            initial_probability: self.initial_probability,
            is_public: self.is_public,
        })
    }
}

/// Body for `POST /v0/resolve/{marketId}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    pub resolution_result: String,
}
