use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::domain::article::{Article, Source};
use crate::pagination::PageView;

/// Raw query parameters accepted by the search page.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Search string entered by the user; may be empty.
    #[serde(default)]
    pub q: String,
    /// Page number as typed, validated by the search service.
    pub page: Option<String>,
}

/// Article prepared for display.
#[derive(Debug, Serialize)]
pub struct ArticleView {
    pub source: Source,
    pub author: Option<String>,
    pub title: String,
    /// Upstream description with unsafe markup removed.
    pub description: Option<String>,
    /// Only `http`/`https` links survive; anything else is dropped.
    pub url: Option<String>,
    pub url_to_image: Option<String>,
    pub published_date: String,
}

/// Keeps `raw` only when it parses as an absolute `http` or `https` URL.
fn web_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| url.to_string())
}

impl From<Article> for ArticleView {
    fn from(article: Article) -> Self {
        let published_date = article.formatted_published_date();
        Self {
            source: article.source,
            author: article.author.filter(|a| !a.trim().is_empty()),
            title: article.title,
            description: article
                .description
                .map(|d| ammonia::clean(&d))
                .filter(|d| !d.trim().is_empty()),
            url: web_url(&article.url),
            url_to_image: article.url_to_image.as_deref().and_then(web_url),
            published_date,
        }
    }
}

/// Data required to render a search results page.
#[derive(Debug, Serialize)]
pub struct SearchPageData {
    /// Query echoed back to the template.
    pub query: String,
    /// Upstream count of matches across every page.
    pub total_results: i64,
    /// Articles of the requested page in upstream order.
    pub articles: Vec<ArticleView>,
    pub pagination: PageView,
}
