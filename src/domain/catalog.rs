use super::product::Product;

/// Load state of the product catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded(Vec<Product>),
    Error(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn products(&self) -> Option<&[Product]> {
        match self {
            LoadStatus::Loaded(products) => Some(products),
            _ => None,
        }
    }

    pub fn find_product(&self, id: i64) -> Option<&Product> {
        self.products()?.iter().find(|p| p.id == id)
    }
}
