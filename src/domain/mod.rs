pub mod cart;
pub mod catalog;
pub mod errors;
pub mod ports;
pub mod product;

pub use cart::{Cart, CartLine};
pub use catalog::LoadStatus;
pub use errors::CatalogError;
pub use ports::CatalogSource;
pub use product::Product;
