pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod views;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use application::{CartHandle, CatalogLoader};
pub use config::AppConfig;
use domain::ports::CatalogSource;
use infrastructure::HttpCatalogSource;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::api::get_catalog,
        handlers::api::get_cart,
        handlers::api::add_cart_item,
        handlers::api::remove_cart_item,
    ),
    components(schemas(
        handlers::api::ProductResponse,
        handlers::api::CatalogResponse,
        handlers::api::CartLineResponse,
        handlers::api::CartResponse,
        handlers::api::AddToCartRequest,
    )),
    tags(
        (name = "catalog", description = "Product catalog load state"),
        (name = "cart", description = "The shared shopping cart"),
    )
)]
pub struct ApiDoc;

/// Composition root: the single catalog loader and the single cart shared by
/// every view and every worker.
#[derive(Clone)]
pub struct Storefront {
    pub catalog: web::Data<CatalogLoader>,
    pub cart: web::Data<CartHandle>,
}

impl Storefront {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            catalog: web::Data::new(CatalogLoader::new(source)),
            cart: web::Data::new(CartHandle::new()),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(HttpCatalogSource::new(config.catalog_url.clone())))
    }

    /// Starts the catalog fetch in the background. Requests are served while
    /// it runs; the task is not cancelled if the server stops first.
    pub fn spawn_catalog_load(&self) {
        let catalog = self.catalog.clone();
        actix_web::rt::spawn(async move {
            catalog.load().await;
        });
    }
}

/// Routes for the HTML pages, the JSON API and the health check.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::pages::home))
        .service(
            web::scope("/cart")
                .route("", web::get().to(handlers::pages::cart_page))
                .route("/add/{product_id}", web::post().to(handlers::pages::add_item))
                .route(
                    "/remove/{product_id}",
                    web::post().to(handlers::pages::remove_item),
                ),
        )
        .service(
            web::scope("/api")
                .route("/catalog", web::get().to(handlers::api::get_catalog))
                .route("/cart", web::get().to(handlers::api::get_cart))
                .route("/cart/items", web::post().to(handlers::api::add_cart_item))
                .route(
                    "/cart/items/{product_id}",
                    web::delete().to(handlers::api::remove_cart_item),
                ),
        )
        .route("/health", web::get().to(handlers::api::health));
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or spawning) the returned
/// server, and for starting the catalog load.
pub fn build_server(
    storefront: Storefront,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let openapi = ApiDoc::openapi();
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(storefront.catalog.clone())
            .app_data(storefront.cart.clone())
            .wrap(Logger::default())
            .configure(configure_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
