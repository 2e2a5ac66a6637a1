//! End-to-end test: a fake catalog endpoint and the storefront both run as
//! real servers on local ports, and the storefront is driven over HTTP.

use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use reqwest::{Client, Url};
use serde_json::{json, Value};
use storefront::{build_server, AppConfig, Storefront};

const CATALOG: &str = r#"[
    {"qty":12,"userId":3,"title":"Espresso cup","description":"Porcelain, 80ml","id":10,"price":10,"image":"https://img.example.com/10.png","thumbnail":"https://img.example.com/10_t.png"},
    {"qty":4,"userId":3,"title":"Grinder","description":"Manual burr grinder","id":11,"price":5,"image":"https://img.example.com/11.png","thumbnail":"https://img.example.com/11_t.png"}
]"#;

fn free_port() -> u16 {
    // Bind to port 0 to let the OS assign a free port, then release it.
    std::net::TcpListener::bind("127.0.0.1:0")
        .expect("bind failed")
        .local_addr()
        .expect("addr failed")
        .port()
}

fn serve_catalog(status: StatusCode, body: &'static str) -> Url {
    let server = HttpServer::new(move || {
        App::new().route(
            "/api/products",
            web::get().to(move || async move {
                HttpResponse::build(status)
                    .content_type("application/json")
                    .body(body)
            }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind fake catalog");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    Url::parse(&format!("http://{}/api/products", addr)).expect("valid url")
}

/// Start the storefront against `catalog_url` and wait for the catalog load
/// to finish. Returns the storefront's base URL.
async fn start_storefront(catalog_url: Url) -> String {
    let port = free_port();
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port,
        catalog_url,
    };

    let storefront = Storefront::from_config(&config);
    let mut status = storefront.catalog.subscribe();
    storefront.spawn_catalog_load();
    tokio::time::timeout(Duration::from_secs(10), status.changed())
        .await
        .expect("catalog load did not finish in time")
        .expect("loader dropped");

    let server = build_server(storefront, &config.host, config.port)
        .expect("Failed to bind the storefront");
    actix_web::rt::spawn(server);

    format!("http://127.0.0.1:{}", port)
}

#[actix_web::test]
async fn shopper_fills_cart_from_fetched_catalog() {
    let app_url = start_storefront(serve_catalog(StatusCode::OK, CATALOG)).await;
    let http = Client::new();

    let catalog: Value = http
        .get(format!("{}/api/catalog", app_url))
        .send()
        .await
        .expect("GET /api/catalog")
        .json()
        .await
        .expect("catalog json");
    assert_eq!(catalog["status"], "loaded");
    assert_eq!(catalog["products"][0]["title"], "Espresso cup");

    for id in [10, 10, 11, 11, 11] {
        let resp = http
            .post(format!("{}/api/cart/items", app_url))
            .json(&json!({ "product_id": id }))
            .send()
            .await
            .expect("POST /api/cart/items");
        assert_eq!(resp.status(), 200);
    }

    let cart: Value = http
        .get(format!("{}/api/cart", app_url))
        .send()
        .await
        .expect("GET /api/cart")
        .json()
        .await
        .expect("cart json");
    assert_eq!(cart["lines"].as_array().map(Vec::len), Some(2));
    assert_eq!(cart["total_price"], "35");

    let cart_page = http
        .get(format!("{}/cart", app_url))
        .send()
        .await
        .expect("GET /cart")
        .text()
        .await
        .expect("cart html");
    assert!(cart_page.contains("Espresso cup"));
    assert!(cart_page.contains("Total: 35"));

    let resp = http
        .delete(format!("{}/api/cart/items/10", app_url))
        .send()
        .await
        .expect("DELETE /api/cart/items/10");
    assert_eq!(resp.status(), 200);

    let home = http
        .get(format!("{}/", app_url))
        .send()
        .await
        .expect("GET /")
        .text()
        .await
        .expect("home html");
    assert!(!home.contains(r#"id="cart-line-10""#));
    assert!(home.contains(r#"id="cart-line-11""#));
    assert!(home.contains("Total: 15"));
}

#[actix_web::test]
async fn failing_catalog_endpoint_ends_in_error_state() {
    let app_url = start_storefront(serve_catalog(StatusCode::INTERNAL_SERVER_ERROR, "oops")).await;
    let http = Client::new();

    let catalog: Value = http
        .get(format!("{}/api/catalog", app_url))
        .send()
        .await
        .expect("GET /api/catalog")
        .json()
        .await
        .expect("catalog json");
    assert_eq!(
        catalog,
        json!({
            "status": "error",
            "message": "Catalog endpoint responded with status 500"
        })
    );

    let home = http
        .get(format!("{}/", app_url))
        .send()
        .await
        .expect("GET /")
        .text()
        .await
        .expect("home html");
    assert!(home.contains("Error: Catalog endpoint responded with status 500"));
    assert!(!home.contains("Loading..."));
}

#[actix_web::test]
async fn openapi_document_is_served() {
    let app_url = start_storefront(serve_catalog(StatusCode::OK, "[]")).await;

    let doc: Value = Client::new()
        .get(format!("{}/api-docs/openapi.json", app_url))
        .send()
        .await
        .expect("GET openapi.json")
        .json()
        .await
        .expect("openapi json");

    assert!(doc["paths"]["/api/cart/items"]["post"].is_object());
    assert!(doc["paths"]["/api/catalog"]["get"].is_object());
}
