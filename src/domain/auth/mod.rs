//! Auth domain — login, logout, authentication state.

pub mod client;
pub mod wire;

pub use client::Auth;
pub use wire::LoginResponse;
