use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::Deserialize;

use crate::domain::errors::CatalogError;
use crate::domain::product::Product;

/// One element of the catalog endpoint's JSON array.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Kept as the raw JSON number so the decimal is parsed from its shortest
    /// textual form rather than from an `f64`.
    pub price: serde_json::Number,
    pub image: String,
    pub thumbnail: String,
    pub qty: u32,
    pub user_id: i64,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CatalogError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let price = BigDecimal::from_str(&record.price.to_string()).map_err(|e| {
            CatalogError::Decode(format!(
                "invalid price '{}' for product {}: {}",
                record.price, record.id, e
            ))
        })?;
        if price < BigDecimal::from(0) {
            return Err(CatalogError::Decode(format!(
                "negative price '{}' for product {}",
                price, record.id
            )));
        }

        Ok(Product {
            id: record.id,
            title: record.title,
            description: record.description,
            price,
            image: record.image,
            thumbnail: record.thumbnail,
            available_qty: record.qty,
            owner_id: record.user_id,
        })
    }
}
