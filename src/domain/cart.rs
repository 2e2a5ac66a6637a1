use bigdecimal::BigDecimal;

use super::product::Product;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> BigDecimal {
        self.product.price.clone() * BigDecimal::from(self.quantity)
    }
}

/// Ordered cart lines, at most one per product id, in first-add order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`, merging into an existing line when the id
    /// is already present. Returns the line's quantity after the add.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
            return line.quantity;
        }
        self.lines.push(CartLine {
            product: product.clone(),
            quantity: 1,
        });
        1
    }

    /// Drops the whole line for `product_id`. Returns `false` when there was
    /// nothing to remove.
    pub fn remove(&mut self, product_id: i64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() != before
    }

    pub fn total_price(&self) -> BigDecimal {
        self.lines
            .iter()
            .fold(BigDecimal::from(0), |acc, line| acc + line.subtotal())
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: i64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;

    use super::Cart;
    use crate::domain::product::fixtures::product;

    #[test]
    fn adding_same_product_twice_merges_into_one_line() {
        let mut cart = Cart::new();
        let p = product(1, "9.99");

        assert_eq!(cart.add(&p), 1);
        assert_eq!(cart.add(&p), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(1).map(|l| l.quantity), Some(2));
    }

    #[test]
    fn lines_keep_first_add_order() {
        let mut cart = Cart::new();
        cart.add(&product(3, "1"));
        cart.add(&product(1, "1"));
        cart.add(&product(3, "1"));
        cart.add(&product(2, "1"));

        let ids: Vec<i64> = cart.lines().iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn removing_missing_product_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add(&product(1, "5"));
        let before = cart.clone();

        assert!(!cart.remove(42));
        assert_eq!(cart, before);
    }

    #[test]
    fn remove_deletes_the_whole_line() {
        let mut cart = Cart::new();
        let p = product(7, "2.50");
        cart.add(&p);
        cart.add(&p);
        cart.add(&p);

        assert!(cart.remove(7));
        assert!(cart.is_empty());
        assert!(cart.line(7).is_none());
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(Cart::new().total_price(), BigDecimal::from(0));
    }

    #[test]
    fn total_price_sums_price_times_quantity() {
        let mut cart = Cart::new();
        let ten = product(1, "10");
        let five = product(2, "5");
        for _ in 0..2 {
            cart.add(&ten);
        }
        for _ in 0..3 {
            cart.add(&five);
        }

        assert_eq!(cart.total_price(), BigDecimal::from(35));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn total_price_keeps_decimal_cents_exact() {
        let mut cart = Cart::new();
        let p = product(1, "0.10");
        for _ in 0..3 {
            cart.add(&p);
        }

        assert_eq!(cart.total_price().to_string(), "0.30");
    }
}
