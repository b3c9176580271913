//! Client for the upstream news search API.

use std::future::Future;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::article::SearchResults;
use crate::domain::types::{PageNumber, PageSize};

pub mod client;

pub use client::NewsClient;

/// Failures surfaced by a single upstream fetch. None of them are retried.
#[derive(Debug, Error)]
pub enum NewsError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Upstream returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Failed to parse upstream response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error envelope the upstream sends alongside non-success statuses.
#[derive(Deserialize)]
struct UpstreamErrorBody {
    code: Option<String>,
    message: String,
}

impl NewsError {
    /// Builds a status error, preferring the upstream's own message over the raw body.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = match serde_json::from_str::<UpstreamErrorBody>(body) {
            Ok(UpstreamErrorBody {
                code: Some(code),
                message,
            }) => format!("{code}: {message}"),
            Ok(UpstreamErrorBody { message, .. }) => message,
            Err(_) => body.to_string(),
        };
        NewsError::Status { status, message }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, NewsError::Transport(err) if err.is_timeout())
    }
}

/// Source of search results, one request per call.
pub trait NewsFetcher {
    /// Number of articles requested per page.
    fn page_size(&self) -> PageSize;

    fn fetch(
        &self,
        query: &str,
        page: PageNumber,
    ) -> impl Future<Output = Result<SearchResults, NewsError>>;
}
