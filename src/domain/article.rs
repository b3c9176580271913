use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publisher of an article as reported by the upstream API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Source {
    pub id: Option<String>,
    pub name: String,
}

/// A single article record in upstream ranking order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: Source,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub content: Option<String>,
}

impl Article {
    /// Publication date formatted for display, e.g. `January 2, 2024`.
    pub fn formatted_published_date(&self) -> String {
        self.published_at.format("%B %-d, %Y").to_string()
    }
}

/// One page of search results.
///
/// `total_results` counts every matching article across all pages, so it
/// stays authoritative for page counting even when `articles` is short.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[serde(default)]
    pub status: String,
    pub total_results: i64,
    #[serde(default)]
    pub articles: Vec<Article>,
}
