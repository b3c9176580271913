//! Upstream client behavior against a mock news API.

use std::time::Duration;

use news_search::domain::types::{PageNumber, PageSize};
use news_search::models::config::NewsApiConfig;
use news_search::news::{NewsClient, NewsError};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> NewsClient {
    let config = NewsApiConfig::new("test-key", server.uri());
    NewsClient::new(&config).expect("client should build")
}

fn page(value: u32) -> PageNumber {
    PageNumber::new(value).expect("positive page")
}

fn articles_body(total_results: i64, titles: &[&str]) -> serde_json::Value {
    let articles: Vec<_> = titles
        .iter()
        .map(|title| {
            json!({
                "source": {"id": null, "name": "Example"},
                "author": null,
                "title": title,
                "description": "Lead",
                "url": format!("https://example.com/{title}"),
                "urlToImage": null,
                "publishedAt": "2024-01-02T10:00:00Z",
                "content": null
            })
        })
        .collect();
    json!({"status": "ok", "totalResults": total_results, "articles": articles})
}

#[tokio::test]
async fn sends_query_paging_and_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .and(header("X-Api-Key", "test-key"))
        .and(query_param("q", "rust lang"))
        .and(query_param("page", "3"))
        .and(query_param("pageSize", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(45, &["a"])))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server)
        .fetch_everything("rust lang", page(3))
        .await
        .expect("fetch should succeed");

    assert_eq!(results.total_results, 45);
    assert_eq!(results.articles.len(), 1);
}

#[tokio::test]
async fn uses_configured_page_size() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .and(query_param("pageSize", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(0, &[])))
        .expect(1)
        .mount(&server)
        .await;

    let config = NewsApiConfig::new("test-key", server.uri())
        .page_size(PageSize::new(5).expect("positive page size"));
    let client = NewsClient::new(&config).expect("client should build");

    let results = client
        .fetch_everything("", PageNumber::FIRST)
        .await
        .expect("fetch should succeed");

    assert_eq!(results.total_results, 0);
    assert!(results.articles.is_empty());
}

#[tokio::test]
async fn keeps_upstream_article_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(articles_body(3, &["c", "a", "b"])),
        )
        .mount(&server)
        .await;

    let results = client_for(&server)
        .fetch_everything("news", PageNumber::FIRST)
        .await
        .expect("fetch should succeed");

    let titles: Vec<_> = results.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["c", "a", "b"]);
}

#[tokio::test]
async fn unauthorized_is_a_status_error_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid or incorrect."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_everything("rust", PageNumber::FIRST)
        .await
        .expect_err("401 should fail");

    match err {
        NewsError::Status { status, message } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert!(message.contains("apiKeyInvalid"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_everything("rust", PageNumber::FIRST)
        .await
        .expect_err("bad JSON should fail");

    assert!(matches!(err, NewsError::Parse(_)));
}

#[tokio::test]
async fn missing_total_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_everything("rust", PageNumber::FIRST)
        .await
        .expect_err("missing totalResults should fail");

    assert!(matches!(err, NewsError::Parse(_)));
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(articles_body(0, &[]))
                .set_delay(Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = NewsApiConfig::new("test-key", server.uri()).timeout_secs(1);
    let client = NewsClient::new(&config).expect("client should build");

    let err = client
        .fetch_everything("rust", PageNumber::FIRST)
        .await
        .expect_err("request should time out");

    assert!(matches!(err, NewsError::Transport(_)));
    assert!(err.is_timeout());
}

#[tokio::test]
async fn unreachable_upstream_is_a_transport_error() {
    // Nothing listens on the discard port.
    let config = NewsApiConfig::new("test-key", "http://127.0.0.1:9");
    let client = NewsClient::new(&config).expect("client should build");

    let err = client
        .fetch_everything("rust", PageNumber::FIRST)
        .await
        .expect_err("connection should fail");

    assert!(matches!(err, NewsError::Transport(_)));
}
