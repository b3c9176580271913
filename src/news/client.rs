use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::domain::article::SearchResults;
use crate::domain::types::{PageNumber, PageSize};
use crate::models::config::NewsApiConfig;
use crate::news::{NewsError, NewsFetcher};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "X-Api-Key";
const EVERYTHING_PATH: &str = "/v2/everything";

/// HTTP client for the upstream `everything` search endpoint.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct NewsClient {
    client: Client,
    base_url: String,
    api_key: String,
    page_size: PageSize,
}

impl NewsClient {
    pub fn new(config: &NewsApiConfig) -> Result<Self, NewsError> {
        let client = Self::build_client(config.timeout_secs)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            page_size: config.page_size,
        })
    }

    /// Fetches one page of articles matching `query`.
    ///
    /// Exactly one request is sent. Transport failures (including the
    /// timeout), non-success statuses and undecodable bodies are returned as
    /// distinct [`NewsError`] variants and never retried.
    pub async fn fetch_everything(
        &self,
        query: &str,
        page: PageNumber,
    ) -> Result<SearchResults, NewsError> {
        let url = self.everything_url();
        let page_size = self.page_size.to_string();
        let page = page.to_string();
        let params = [
            ("q", query),
            ("pageSize", page_size.as_str()),
            ("page", page.as_str()),
            ("sortBy", "publishedAt"),
            ("language", "en"),
        ];

        debug!("Requesting {url} page {page}");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(NewsError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(NewsError::Transport)?;

        if !status.is_success() {
            return Err(NewsError::from_status(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn build_client(timeout_secs: u64) -> Result<Client, NewsError> {
        Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(NewsError::Client)
    }

    fn everything_url(&self) -> String {
        format!("{}{}", self.base_url, EVERYTHING_PATH)
    }
}

impl NewsFetcher for NewsClient {
    fn page_size(&self) -> PageSize {
        self.page_size
    }

    async fn fetch(&self, query: &str, page: PageNumber) -> Result<SearchResults, NewsError> {
        self.fetch_everything(query, page).await
    }
}
