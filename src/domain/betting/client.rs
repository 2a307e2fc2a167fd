//! Betting sub-client — place, sell, own position.

use crate::client::SocialPredictClient;
use crate::domain::betting::wire::{BetRequest, UserPosition};
use crate::domain::market::wire::Bet;
use crate::error::ApiError;
use rust_decimal::Decimal;

/// Sub-client for betting operations. All methods require an authenticated
/// client.
pub struct Betting<'a> {
    pub(crate) client: &'a SocialPredictClient,
}

impl<'a> Betting<'a> {
    /// Place a bet of `amount` credits on `outcome`.
    pub async fn place_bet(
        &self,
        market_id: i64,
        amount: Decimal,
        outcome: &str,
    ) -> Result<Bet, ApiError> {
        if amount <= Decimal::ZERO {
            return Err(ApiError::validation("Bet amount must be greater than 0"));
        }
        let body = BetRequest {
            market_id,
            amount,
            outcome: outcome.to_string(),
        };
        self.client.http.post("/v0/bet", &body).await
    }

    /// Sell `amount` worth of shares held on `outcome`.
    pub async fn sell(
        &self,
        market_id: i64,
        amount: Decimal,
        outcome: &str,
    ) -> Result<Bet, ApiError> {
        if amount <= Decimal::ZERO {
            return Err(ApiError::validation("Sell amount must be greater than 0"));
        }
        let body = BetRequest {
            market_id,
            amount,
            outcome: outcome.to_string(),
        };
        self.client.http.post("/v0/sell", &body).await
    }

    /// The authenticated user's position on a market.
    pub async fn user_position(&self, market_id: i64) -> Result<UserPosition, ApiError> {
        self.client
            .http
            .get(&format!("/v0/userposition/{}", market_id))
            .await
    }
}
