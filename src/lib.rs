#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::news::NewsClient;
#[cfg(feature = "server")]
use crate::routes::main::{search, show_index};

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod news;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Registers the page handlers and the static asset directory.
#[cfg(feature = "server")]
pub fn configure_routes(cfg: &mut web::ServiceConfig, assets_dir: &str) {
    cfg.service(Files::new("/assets", assets_dir))
        .service(show_index)
        .service(search);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // One upstream client for the whole process; clones share its connection pool.
    let news_client = NewsClient::new(&server_config.news)
        .map_err(|e| std::io::Error::other(format!("Failed to build news client: {e}")))?;

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    let assets_dir = server_config.assets_dir.clone();

    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(|cfg| configure_routes(cfg, &assets_dir))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(news_client.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
