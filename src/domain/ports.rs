use async_trait::async_trait;

use super::errors::CatalogError;
use super::product::Product;

#[async_trait]
pub trait CatalogSource: Send + Sync + 'static {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}
