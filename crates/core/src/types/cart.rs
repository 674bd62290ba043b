//! The in-memory cart model.
//!
//! A cart is an ordered list of lines, one per product id, each with a
//! positive quantity. All mutations are total functions: unknown ids are
//! ignored and quantities clamp at zero (a line that reaches zero is removed,
//! never retained). `total()` is derived on every read - nothing is cached.

use serde::{Deserialize, Serialize};

use super::product::Product;

/// One product in the cart with its selected quantity.
///
/// Invariant: `quantity` is always >= 1 while the line is inside a [`Cart`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal in whole UGX.
    #[must_use]
    pub const fn subtotal(&self) -> u64 {
        self.product.price * self.quantity as u64
    }
}

/// The set of items selected for purchase, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of a product.
    ///
    /// An existing line for the same product id is incremented; otherwise a
    /// new line with quantity 1 is appended.
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
    }

    /// Adjust a line's quantity by a signed delta.
    ///
    /// The resulting quantity clamps at zero, and a line at zero is removed.
    /// Unknown ids are a no-op.
    pub fn update_quantity(&mut self, id: &str, delta: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == id) {
            let new_quantity = i64::from(line.quantity).saturating_add(delta).max(0);
            line.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        }
        self.lines.retain(|l| l.quantity > 0);
    }

    /// Drop a line unconditionally. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|l| l.product.id != id);
    }

    /// Empty the cart. Called after a successful checkout commit.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Derived total in whole UGX, recomputed on every read.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Total number of units across all lines (the cart badge number).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Items summary string: `"2x Red Velvet Heart, 1x Morris Special Rolex"`.
    #[must_use]
    pub fn summary(&self) -> String {
        self.lines
            .iter()
            .map(|l| format!("{}x {}", l.quantity, l.product.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::product::Category;

    fn product(id: &str, name: &str, price: u64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: Category::Cakes,
            price,
            description: String::new(),
            image: String::new(),
            featured: false,
        }
    }

    fn quantity_of(cart: &Cart, id: &str) -> Option<u32> {
        cart.lines()
            .iter()
            .find(|l| l.product.id == id)
            .map(|l| l.quantity)
    }

    #[test]
    fn test_add_new_product_appends_line() {
        let mut cart = Cart::new();
        cart.add(product("a", "Cake A", 1000));
        cart.add(product("b", "Cake B", 2000));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(quantity_of(&cart, "a"), Some(1));
        assert_eq!(cart.lines()[0].product.id, "a");
        assert_eq!(cart.lines()[1].product.id, "b");
    }

    #[test]
    fn test_add_existing_product_increments_single_line() {
        let mut cart = Cart::new();
        cart.add(product("a", "Cake A", 1000));
        cart.add(product("a", "Cake A", 1000));
        cart.add(product("a", "Cake A", 1000));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(quantity_of(&cart, "a"), Some(3));
    }

    #[test]
    fn test_total_is_exact_sum() {
        let mut cart = Cart::new();
        cart.add(product("a", "Cake A", 35000));
        cart.add(product("a", "Cake A", 35000));
        cart.add(product("b", "Cake B", 4500));

        assert_eq!(cart.total(), 35000 * 2 + 4500);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_add_then_remove_restores_prior_state() {
        let mut cart = Cart::new();
        cart.add(product("a", "Cake A", 1000));
        let before = cart.clone();

        cart.add(product("b", "Cake B", 2000));
        cart.remove("b");

        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity_clamps_at_zero_and_removes() {
        let mut cart = Cart::new();
        cart.add(product("a", "Cake A", 1000));
        cart.update_quantity("a", 2);
        assert_eq!(quantity_of(&cart, "a"), Some(3));

        cart.update_quantity("a", -2);
        assert_eq!(quantity_of(&cart, "a"), Some(1));

        cart.update_quantity("a", -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_large_negative_delta_removes_line() {
        let mut cart = Cart::new();
        cart.add(product("a", "Cake A", 1000));
        cart.update_quantity("a", i64::MIN);

        assert!(cart.is_empty());
        assert!(cart.lines().iter().all(|l| l.quantity > 0));
    }

    #[test]
    fn test_update_and_remove_unknown_id_are_no_ops() {
        let mut cart = Cart::new();
        cart.add(product("a", "Cake A", 1000));
        let before = cart.clone();

        cart.update_quantity("zzz", 5);
        cart.remove("zzz");

        assert_eq!(cart, before);
    }

    #[test]
    fn test_no_duplicate_ids_and_no_zero_quantities_across_mutations() {
        let mut cart = Cart::new();
        for _ in 0..4 {
            cart.add(product("a", "Cake A", 1000));
            cart.add(product("b", "Cake B", 2000));
        }
        cart.update_quantity("a", -3);
        cart.update_quantity("b", -10);
        cart.add(product("b", "Cake B", 2000));

        let mut ids: Vec<_> = cart.lines().iter().map(|l| l.product.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), cart.lines().len());
        assert!(cart.lines().iter().all(|l| l.quantity > 0));
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add(product("a", "Cake A", 1000));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
        assert_eq!(cart.summary(), "");
    }

    #[test]
    fn test_summary_joins_quantity_name_pairs() {
        let mut cart = Cart::new();
        cart.add(product("a", "Red Velvet Heart", 145_000));
        cart.add(product("a", "Red Velvet Heart", 145_000));
        cart.add(product("l1", "Morris Special Rolex", 3500));

        assert_eq!(
            cart.summary(),
            "2x Red Velvet Heart, 1x Morris Special Rolex"
        );
    }
}
