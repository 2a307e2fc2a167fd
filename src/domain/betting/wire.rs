//! Wire types for betting requests/responses (REST).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body for `POST /v0/bet` and `POST /v0/sell`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BetRequest {
    pub market_id: i64,
    pub amount: Decimal,
    pub outcome: String,
}

/// The authenticated user's share holdings on one market,
/// from `GET /v0/userposition/{marketId}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPosition {
    pub yes_shares_owned: Decimal,
    pub no_shares_owned: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
}
