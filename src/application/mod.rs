pub mod cart_store;
pub mod catalog_loader;

pub use cart_store::CartHandle;
pub use catalog_loader::CatalogLoader;
