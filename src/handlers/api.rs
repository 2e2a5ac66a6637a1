use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::application::{CartHandle, CatalogLoader};
use crate::domain::cart::{Cart, CartLine};
use crate::domain::catalog::LoadStatus;
use crate::domain::product::Product;
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Decimal price as a string, e.g. "9.99"
    pub price: String,
    pub image: String,
    pub thumbnail: String,
    pub available_qty: u32,
    pub owner_id: i64,
}

impl From<&Product> for ProductResponse {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            description: p.description.clone(),
            price: p.price.to_string(),
            image: p.image.clone(),
            thumbnail: p.thumbnail.clone(),
            available_qty: p.available_qty,
            owner_id: p.owner_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CatalogResponse {
    Loading,
    Loaded { products: Vec<ProductResponse> },
    Error { message: String },
}

impl From<&LoadStatus> for CatalogResponse {
    fn from(status: &LoadStatus) -> Self {
        match status {
            LoadStatus::Loading => CatalogResponse::Loading,
            LoadStatus::Loaded(products) => CatalogResponse::Loaded {
                products: products.iter().map(ProductResponse::from).collect(),
            },
            LoadStatus::Error(message) => CatalogResponse::Error {
                message: message.clone(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartLineResponse {
    pub product: ProductResponse,
    pub quantity: u32,
    /// price × quantity, as a decimal string
    pub subtotal: String,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        Self {
            product: ProductResponse::from(&line.product),
            quantity: line.quantity,
            subtotal: line.subtotal().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartResponse {
    pub lines: Vec<CartLineResponse>,
    pub item_count: u32,
    pub total_price: String,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineResponse::from).collect(),
            item_count: cart.item_count(),
            total_price: cart.total_price().to_string(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: i64,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /api/catalog
///
/// Current load state of the catalog.
#[utoipa::path(
    get,
    path = "/api/catalog",
    responses(
        (status = 200, description = "Catalog load state", body = CatalogResponse),
    ),
    tag = "catalog"
)]
pub async fn get_catalog(catalog: web::Data<CatalogLoader>) -> HttpResponse {
    HttpResponse::Ok().json(CatalogResponse::from(&catalog.status()))
}

/// GET /api/cart
#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart contents and total", body = CartResponse),
    ),
    tag = "cart"
)]
pub async fn get_cart(cart: web::Data<CartHandle>) -> HttpResponse {
    HttpResponse::Ok().json(CartResponse::from(&cart.snapshot()))
}

/// POST /api/cart/items
///
/// Adds one unit of a catalog product, merging with an existing line.
#[utoipa::path(
    post,
    path = "/api/cart/items",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Updated cart", body = CartResponse),
        (status = 404, description = "Product not in the catalog"),
        (status = 503, description = "Catalog still loading or failed to load"),
    ),
    tag = "cart"
)]
pub async fn add_cart_item(
    catalog: web::Data<CatalogLoader>,
    cart: web::Data<CartHandle>,
    body: web::Json<AddToCartRequest>,
) -> Result<HttpResponse, AppError> {
    let product = super::lookup_product(&catalog, body.product_id)?;
    cart.add_to_cart(&product);
    Ok(HttpResponse::Ok().json(CartResponse::from(&cart.snapshot())))
}

/// DELETE /api/cart/items/{product_id}
///
/// Removes the whole line. Unknown ids leave the cart unchanged.
#[utoipa::path(
    delete,
    path = "/api/cart/items/{product_id}",
    params(
        ("product_id" = i64, Path, description = "Catalog product id"),
    ),
    responses(
        (status = 200, description = "Updated cart", body = CartResponse),
    ),
    tag = "cart"
)]
pub async fn remove_cart_item(cart: web::Data<CartHandle>, path: web::Path<i64>) -> HttpResponse {
    cart.remove_from_cart(path.into_inner());
    HttpResponse::Ok().json(CartResponse::from(&cart.snapshot()))
}

/// GET /health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
