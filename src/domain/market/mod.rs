//! Market domain — listing, search, projections, creation, resolution.

pub mod client;
pub mod wire;

pub use client::Markets;
pub use wire::{
    Bet, CreateMarketRequest, LeaderboardEntry, Market, MarketDetail, MarketOverview,
    MarketPosition, MarketsResponse, ProjectionResponse,
};
