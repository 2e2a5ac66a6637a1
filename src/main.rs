use dotenvy::dotenv;
use storefront::{build_server, AppConfig, Storefront};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let storefront = Storefront::from_config(&config);
    log::info!("Loading catalog from {}", config.catalog_url);
    storefront.spawn_catalog_load();

    log::info!(
        "Starting storefront at http://{}:{}",
        config.host,
        config.port
    );

    build_server(storefront, &config.host, config.port)?.await
}
