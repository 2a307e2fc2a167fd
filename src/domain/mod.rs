//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `client.rs` — Sub-client wrapping one area of the API surface
//!
//! Every sub-client method follows the same shape: validate inputs locally,
//! build the path/query/body, delegate to the transport, return the decoded
//! response unchanged.

pub mod admin;
pub mod auth;
pub mod betting;
pub mod config;
pub mod market;
pub mod user;
