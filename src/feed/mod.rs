//! Scoreboard feed access.
//!
//! Fetches the JSONP scoreboard, strips the function-call wrapper and decodes
//! the per-game records.

mod client;
mod error;
mod models;

pub use client::{FeedClient, RetryPolicy};
pub use error::FeedError;
pub use models::GameRecord;
