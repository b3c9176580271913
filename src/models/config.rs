//! Configuration model loaded from external sources.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::types::PageSize;

/// Upper bound the upstream accepts for `pageSize`.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Clone, Debug, Deserialize, Validate)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    #[validate(nested)]
    pub news: NewsApiConfig,
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Settings for the upstream news API, fixed for the process lifetime.
pub struct NewsApiConfig {
    #[validate(length(min = 1, message = "api key must be set"))]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    #[validate(url)]
    pub base_url: String,
    #[serde(default = "default_page_size")]
    #[validate(custom(function = "validate_page_size"))]
    pub page_size: PageSize,
    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1))]
    pub timeout_secs: u64,
}

impl NewsApiConfig {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

fn validate_page_size(page_size: &PageSize) -> Result<(), ValidationError> {
    if page_size.get() <= MAX_PAGE_SIZE {
        Ok(())
    } else {
        Err(ValidationError::new("page_size_too_large"))
    }
}

fn default_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_templates_dir() -> String {
    "templates/**/*".to_string()
}

fn default_assets_dir() -> String {
    "./assets".to_string()
}

fn default_base_url() -> String {
    "https://newsapi.org".to_string()
}

fn default_page_size() -> PageSize {
    PageSize::DEFAULT
}

fn default_timeout_secs() -> u64 {
    10
}
