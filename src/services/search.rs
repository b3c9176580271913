use log::info;

use crate::domain::types::{PageNumber, TypeConstraintError};
use crate::dto::search::{ArticleView, SearchPageData, SearchQuery};
use crate::news::NewsFetcher;
use crate::pagination::PageState;
use crate::services::ServiceResult;

/// Parses the raw `page` parameter. Absent or blank means the first page.
pub fn parse_page(raw: Option<&str>) -> Result<PageNumber, TypeConstraintError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(PageNumber::FIRST),
        Some(value) => value.parse(),
    }
}

/// Runs one search: validates the page, fetches it upstream and derives the
/// pagination state. Any failure ends the request before anything is built.
pub async fn search_news<F>(fetcher: &F, query: SearchQuery) -> ServiceResult<SearchPageData>
where
    F: NewsFetcher,
{
    let page = parse_page(query.page.as_deref())?;

    let results = fetcher.fetch(&query.q, page).await?;

    info!("Search query is: {:?}", query.q);
    info!("Page is: {page}");

    let state = PageState::new(
        i64::from(page),
        fetcher.page_size(),
        results.total_results,
    );

    Ok(SearchPageData {
        query: query.q,
        total_results: results.total_results,
        articles: results.articles.into_iter().map(ArticleView::from).collect(),
        pagination: state.into(),
    })
}
