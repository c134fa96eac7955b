//! Logs endpoint access layer
//!
//! This module handles fetching activity entries over HTTP and delivering
//! poll outcomes to the application without blocking the event loop.

mod client;
mod demo;
mod poller;

pub use client::LogsClient;
pub use demo::DemoFeed;
pub use poller::{FeedSource, PollOutcome, Poller};

use thiserror::Error;

/// Errors that can occur when fetching the activity log
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned HTTP {code}")]
    Status { code: u16 },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
