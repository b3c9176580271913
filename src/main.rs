use std::env;

use config::Config;
use dotenvy::dotenv;
use validator::Validate;

use news_search::models::config::ServerConfig;

/// Layers `config/default`, `config/{APP_ENV}` and `APP_*` variables (`__`
/// separates nested keys, e.g. `APP_NEWS__API_KEY`). The bare
/// `PORT` and `APIKEY` variables override the port and upstream key when set.
fn load_config() -> Result<ServerConfig, config::ConfigError> {
    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("port", non_empty_var("PORT"))?
        .set_override_option("news.api_key", non_empty_var("APIKEY"))?
        .build()?
        .try_deserialize::<ServerConfig>()
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match load_config() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = server_config.validate() {
        log::error!("Invalid server config: {err}");
        std::process::exit(1);
    }

    news_search::run(server_config).await
}
