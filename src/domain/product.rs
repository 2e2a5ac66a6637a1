use bigdecimal::BigDecimal;

/// A catalog entry as fetched from the product endpoint.
///
/// Products are never mutated after the catalog is loaded; cart lines keep
/// their own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: BigDecimal,
    pub image: String,
    pub thumbnail: String,
    pub available_qty: u32,
    pub owner_id: i64,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use super::Product;

    pub fn product(id: i64, price: &str) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            description: format!("Description of product {}", id),
            price: BigDecimal::from_str(price).expect("valid decimal"),
            image: format!("https://img.example.com/{}.png", id),
            thumbnail: format!("https://img.example.com/{}_thumb.png", id),
            available_qty: 10,
            owner_id: 1,
        }
    }
}
