//! User domain — public profiles, portfolios, own-profile management.

pub mod client;
pub mod wire;

pub use client::Users;
pub use wire::{Portfolio, PortfolioItem, UserCredit, UserInfo};
