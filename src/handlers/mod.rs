pub mod api;
pub mod pages;

use crate::application::CatalogLoader;
use crate::domain::catalog::LoadStatus;
use crate::domain::product::Product;
use crate::errors::AppError;

/// Resolves `product_id` against the loaded catalog.
pub(crate) fn lookup_product(catalog: &CatalogLoader, product_id: i64) -> Result<Product, AppError> {
    if let Some(product) = catalog.find_product(product_id) {
        return Ok(product);
    }
    match catalog.status() {
        LoadStatus::Loading => Err(AppError::CatalogUnavailable(
            "catalog is still loading".to_string(),
        )),
        LoadStatus::Error(message) => Err(AppError::CatalogUnavailable(message)),
        LoadStatus::Loaded(_) => Err(AppError::NotFound(format!("product {}", product_id))),
    }
}
