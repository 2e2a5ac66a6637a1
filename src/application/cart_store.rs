use std::sync::Arc;

use bigdecimal::BigDecimal;
use parking_lot::Mutex;

use crate::domain::cart::Cart;
use crate::domain::product::Product;

/// Shared handle to the one cart of the storefront.
///
/// Clones refer to the same cart. The lock is only held for the duration of a
/// single call and never across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct CartHandle(Arc<Mutex<Cart>>);

impl CartHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_to_cart(&self, product: &Product) -> u32 {
        let quantity = self.0.lock().add(product);
        log::debug!("Cart: product {} now at quantity {}", product.id, quantity);
        quantity
    }

    pub fn remove_from_cart(&self, product_id: i64) -> bool {
        let removed = self.0.lock().remove(product_id);
        log::debug!("Cart: remove product {} (removed: {})", product_id, removed);
        removed
    }

    pub fn total_price(&self) -> BigDecimal {
        self.0.lock().total_price()
    }

    pub fn item_count(&self) -> u32 {
        self.0.lock().item_count()
    }

    /// Copy of the cart as it is right now.
    pub fn snapshot(&self) -> Cart {
        self.0.lock().clone()
    }
}
