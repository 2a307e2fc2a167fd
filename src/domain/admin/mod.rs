//! Admin domain — privileged user-management operations.

pub mod client;
pub mod wire;

pub use client::Admin;
pub use wire::AdminCreateUserRequest;
