//! Order summary shown on the checkout page.

use crate::cart::Cart;
use crate::error::StoreError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Delivery pricing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Delivery {
    /// Free delivery, the shop's only offer today.
    #[default]
    Free,
    /// Paid courier delivery.
    Paid(Money),
}

impl Delivery {
    /// Delivery cost.
    pub fn cost(&self) -> Money {
        match self {
            Delivery::Free => Money::zero(),
            Delivery::Paid(cost) => *cost,
        }
    }

    /// Display label ("Бесплатно" for free delivery).
    pub fn display(&self) -> String {
        match self {
            Delivery::Free => "Бесплатно".to_string(),
            Delivery::Paid(cost) => cost.display(),
        }
    }
}

/// Totals breakdown for the checkout page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    /// Goods total, before delivery.
    pub goods_total: Money,
    /// Delivery pricing.
    pub delivery: Delivery,
    /// Final total.
    pub grand_total: Money,
}

impl OrderSummary {
    /// Build a summary for a cart with the given delivery option.
    pub fn for_cart(cart: &Cart, delivery: Delivery) -> Result<Self, StoreError> {
        let goods_total = cart.totals()?.total_price;
        let grand_total = goods_total
            .try_add(delivery.cost())
            .ok_or(StoreError::Overflow)?;
        Ok(Self {
            goods_total,
            delivery,
            grand_total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_free_delivery_summary() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::new();
        cart.add(&catalog.products()[0]).unwrap(); // 3200

        let summary = OrderSummary::for_cart(&cart, Delivery::Free).unwrap();
        assert_eq!(summary.goods_total, Money::new(3200));
        assert_eq!(summary.grand_total, Money::new(3200));
        assert_eq!(summary.delivery.display(), "Бесплатно");
    }

    #[test]
    fn test_paid_delivery_summary() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::new();
        cart.add(&catalog.products()[3]).unwrap(); // 890

        let summary = OrderSummary::for_cart(&cart, Delivery::Paid(Money::new(300))).unwrap();
        assert_eq!(summary.grand_total, Money::new(1190));
    }
}
