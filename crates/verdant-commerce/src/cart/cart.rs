//! Cart and cart item types.

use crate::cart::CartTotals;
use crate::catalog::Product;
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// An item in the cart: a product snapshot plus a quantity.
///
/// The cart holds at most one item per product ID; repeated adds bump the
/// quantity instead of appending a duplicate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product, snapshotted at add time.
    pub product: Product,
    /// Quantity (always positive while the item exists).
    pub quantity: i64,
}

impl CartItem {
    /// Create a new item with quantity 1.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Line total: price * quantity.
    pub fn line_total(&self) -> Result<Money, StoreError> {
        self.product
            .price
            .try_multiply(self.quantity)
            .ok_or(StoreError::Overflow)
    }
}

/// A shopping cart.
///
/// Items are kept in the order their products were first added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in the cart, in first-add order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get an item by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Add one unit of a product.
    ///
    /// If the product is already in the cart its quantity is incremented,
    /// otherwise a new item with quantity 1 is appended.
    pub fn add(&mut self, product: &Product) -> Result<(), StoreError> {
        self.add_with_quantity(product, 1)
    }

    /// Add several units of a product at once.
    ///
    /// Returns an error for non-positive quantities; use
    /// [`set_quantity`](Self::set_quantity) to shrink or remove a line.
    pub fn add_with_quantity(&mut self, product: &Product, quantity: i64) -> Result<(), StoreError> {
        if quantity <= 0 {
            return Err(StoreError::InvalidQuantity(quantity));
        }
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(StoreError::Overflow)?;
        } else {
            let mut item = CartItem::new(product.clone());
            item.quantity = quantity;
            self.items.push(item);
        }
        Ok(())
    }

    /// Remove an item by product ID. Returns false if it was not in the
    /// cart (a no-op, not an error).
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        self.items.len() < len_before
    }

    /// Set an item's quantity.
    ///
    /// A quantity of zero or below removes the item, so driving the count
    /// down with the minus button eventually drops the line. Returns true
    /// if the cart changed.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Remove everything from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Compute the cart totals.
    ///
    /// Always recomputed from the current items; nothing is cached, so the
    /// result can never drift from the cart contents.
    pub fn totals(&self) -> Result<CartTotals, StoreError> {
        let mut total_price = Money::zero();
        let mut item_count: i64 = 0;
        for item in &self.items {
            total_price = total_price
                .try_add(item.line_total()?)
                .ok_or(StoreError::Overflow)?;
            item_count = item_count
                .checked_add(item.quantity)
                .ok_or(StoreError::Overflow)?;
        }
        Ok(CartTotals {
            total_price,
            item_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn product(id: i64, price: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Растение {}", id),
            Money::new(price),
            Category::LowMaintenance,
            "https://example.com/plant.png",
            "Тестовое растение.",
        )
    }

    #[test]
    fn test_add_new_item() {
        let mut cart = Cart::new();
        cart.add(&product(1, 1000)).unwrap();
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, 1);
    }

    #[test]
    fn test_repeated_add_increments_quantity() {
        let mut cart = Cart::new();
        let p = product(1, 1000);
        for _ in 0..4 {
            cart.add(&p).unwrap();
        }
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get(p.id).unwrap().quantity, 4);
    }

    #[test]
    fn test_add_with_quantity() {
        let mut cart = Cart::new();
        let p = product(1, 1000);
        cart.add_with_quantity(&p, 3).unwrap();
        cart.add(&p).unwrap();
        assert_eq!(cart.get(p.id).unwrap().quantity, 4);

        assert_eq!(
            cart.add_with_quantity(&p, 0),
            Err(StoreError::InvalidQuantity(0))
        );
        assert_eq!(
            cart.add_with_quantity(&p, -2),
            Err(StoreError::InvalidQuantity(-2))
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(&product(2, 500)).unwrap();
        cart.add(&product(1, 700)).unwrap();
        cart.add(&product(2, 500)).unwrap();
        let ids: Vec<i64> = cart.items().iter().map(|i| i.product.id.value()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, 1000)).unwrap();
        assert!(!cart.remove(ProductId::new(9)));
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_remove_then_add_resets_quantity() {
        let mut cart = Cart::new();
        let p = product(1, 1000);
        cart.add(&p).unwrap();
        cart.add(&p).unwrap();
        assert!(cart.remove(p.id));
        cart.add(&p).unwrap();
        assert_eq!(cart.get(p.id).unwrap().quantity, 1);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        let p = product(1, 1000);
        cart.add(&p).unwrap();
        assert!(cart.set_quantity(p.id, 7));
        assert_eq!(cart.get(p.id).unwrap().quantity, 7);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        let p = product(1, 1000);
        cart.add(&p).unwrap();
        assert!(cart.set_quantity(p.id, 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_removes() {
        let mut cart = Cart::new();
        let p = product(1, 1000);
        cart.add(&p).unwrap();
        assert!(cart.set_quantity(p.id, -5));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.set_quantity(ProductId::new(1), 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_track_mutations() {
        let mut cart = Cart::new();
        let a = product(1, 1200);
        let b = product(2, 890);

        cart.add(&a).unwrap();
        cart.add(&a).unwrap();
        assert_eq!(cart.totals().unwrap().total_price, Money::new(2400));

        cart.add(&b).unwrap();
        let totals = cart.totals().unwrap();
        assert_eq!(totals.total_price, Money::new(3290));
        assert_eq!(totals.item_count, 3);

        cart.remove(a.id);
        let totals = cart.totals().unwrap();
        assert_eq!(totals.total_price, Money::new(890));
        assert_eq!(totals.item_count, 1);
    }

    #[test]
    fn test_totals_empty_cart() {
        let cart = Cart::new();
        let totals = cart.totals().unwrap();
        assert!(totals.total_price.is_zero());
        assert_eq!(totals.item_count, 0);
    }

    #[test]
    fn test_totals_overflow() {
        let mut cart = Cart::new();
        let p = product(1, i64::MAX);
        cart.add(&p).unwrap();
        cart.set_quantity(p.id, 2);
        assert_eq!(cart.totals(), Err(StoreError::Overflow));
    }
}
