//! Cart totals.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Derived totals for a cart.
///
/// Produced by [`Cart::totals`](crate::cart::Cart::totals) on demand and
/// never stored, so a `CartTotals` value reflects the cart exactly as it
/// was at the moment of the call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartTotals {
    /// Sum of price * quantity over all items.
    pub total_price: Money,
    /// Sum of quantities over all items.
    pub item_count: i64,
}

impl CartTotals {
    /// Check if there is anything in the cart.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_totals() {
        let totals = CartTotals::default();
        assert!(totals.is_empty());
        assert!(totals.total_price.is_zero());
    }

    #[test]
    fn test_totals_json_view() {
        // The presentation layer consumes totals as a serialized view.
        let totals = CartTotals {
            total_price: Money::new(3290),
            item_count: 3,
        };
        let json = serde_json::to_string(&totals).unwrap();
        assert!(json.contains("\"item_count\":3"));

        let back: CartTotals = serde_json::from_str(&json).unwrap();
        assert_eq!(back, totals);
    }
}
