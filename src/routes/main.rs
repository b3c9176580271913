use actix_web::{Responder, get, web};
use tera::{Context, Tera};

use crate::dto::search::SearchQuery;
use crate::news::NewsClient;
use crate::routes::{render_template, service_error_response};
use crate::services::search::search_news;

#[get("/")]
pub async fn show_index(tera: web::Data<Tera>) -> impl Responder {
    render_template(&tera, "index.html", &Context::new())
}

#[get("/search")]
pub async fn search(
    params: web::Query<SearchQuery>,
    news: web::Data<NewsClient>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match search_news(news.get_ref(), params.into_inner()).await {
        Ok(data) => data,
        Err(e) => return service_error_response(&e),
    };

    let mut context = Context::new();
    context.insert("search", &data);

    render_template(&tera, "index.html", &context)
}
