//! # SocialPredict SDK
//!
//! A typed Rust client for the SocialPredict prediction-market REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Uniform error type, shared resource conventions
//! 2. **HTTP Transport** — `SocialPredictHttp`: the single chokepoint that
//!    injects the bearer token and classifies every failure
//! 3. **Resource Groups** — One sub-client per API area (auth, markets,
//!    betting, users, config, admin), each a thin validate → path → transport
//!    wrapper
//! 4. **High-Level Client** — `SocialPredictClient` with nested sub-clients
//!    and token passthroughs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use socialpredict_sdk::prelude::*;
//!
//! let client = SocialPredictClient::builder()
//!     .base_url("http://localhost:8080")
//!     .build()?;
//!
//! client.auth().login("alice", "password123").await?;
//! let markets = client.markets().active().await?;
//! let bet = client.betting().place_bet(1, 20.into(), "YES").await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Uniform SDK error type.
pub mod error;

/// Shared resource conventions: validation, query building, dates.
pub mod resource;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP Transport ──────────────────────────────────────────────────

/// HTTP transport with bearer injection and error classification.
pub mod http;

// ── Layer 3: Resource Groups ─────────────────────────────────────────────────

/// Domain modules (vertical slices): wire types and sub-clients.
pub mod domain;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `SocialPredictClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Errors
    pub use crate::error::{ApiError, StructuredError};

    // Resource conventions
    pub use crate::resource::DateParam;

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Domain types — auth
    pub use crate::domain::auth::LoginResponse;

    // Domain types — markets
    pub use crate::domain::market::{
        Bet, CreateMarketRequest, LeaderboardEntry, Market, MarketDetail, MarketOverview,
        MarketPosition, MarketsResponse, ProjectionResponse,
    };

    // Domain types — betting
    pub use crate::domain::betting::UserPosition;

    // Domain types — users
    pub use crate::domain::user::{Portfolio, PortfolioItem, UserCredit, UserInfo};

    // Domain types — admin
    pub use crate::domain::admin::AdminCreateUserRequest;

    // Transport + client
    pub use crate::client::{
        AdminClient, AuthClient, BettingClient, ConfigClient, MarketsClient,
        SocialPredictClient, SocialPredictClientBuilder, UsersClient,
    };
    pub use crate::http::{HttpConfig, SocialPredictHttp};
}
