use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::domain::errors::CatalogError;
use crate::domain::ports::CatalogSource;
use crate::domain::product::Product;

use super::models::ProductRecord;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CatalogError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            CatalogError::Status {
                status: status.as_u16(),
            }
        } else {
            CatalogError::Transport(e.to_string())
        }
    }
}

// ── Catalog source ───────────────────────────────────────────────────────────

/// Reads the product list with a single unauthenticated `GET`.
pub struct HttpCatalogSource {
    http: Client,
    endpoint: Url,
}

impl HttpCatalogSource {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        log::debug!("GET {}", self.endpoint);
        let records: Vec<ProductRecord> = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        records.into_iter().map(Product::try_from).collect()
    }
}
