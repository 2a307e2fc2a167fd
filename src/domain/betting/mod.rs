//! Betting domain — placing bets, selling shares, the caller's own position.

pub mod client;
pub mod wire;

pub use client::Betting;
pub use wire::UserPosition;
