//! HTTP handlers and the helpers they share.

use actix_web::HttpResponse;
use log::error;
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod main;

/// Renders `template` with `context` into an HTML response.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            error!("Failed to render template {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Maps a failed search onto a response. Bad input from the user is a client
/// error; everything upstream is a server error.
pub fn service_error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::InvalidPage(e) => HttpResponse::BadRequest()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Invalid page: {e}")),
        ServiceError::Upstream(e) => {
            error!("Search failed: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
