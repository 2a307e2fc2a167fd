//! HTTP transport layer — `SocialPredictHttp`, the single chokepoint for
//! every outbound call.

pub mod client;

pub use client::{HttpConfig, SocialPredictHttp};
