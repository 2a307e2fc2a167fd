//! Config domain — site-wide, mostly unauthenticated read endpoints.

pub mod client;

pub use client::Config;
