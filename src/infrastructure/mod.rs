pub mod http_catalog;
pub mod models;

pub use http_catalog::HttpCatalogSource;
