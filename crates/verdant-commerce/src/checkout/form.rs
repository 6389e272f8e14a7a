//! Checkout form data.
//!
//! The storefront collects shipping and payment fields without processing
//! them: there is no gateway and nothing is persisted. Validation is
//! completeness-only, enough to drive the submit button state.

use crate::cart::Cart;
use serde::{Deserialize, Serialize};

/// Delivery details entered by the customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ShippingInfo {
    /// Customer name.
    pub name: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Delivery address (city, street, building, apartment).
    pub address: String,
}

impl ShippingInfo {
    /// Check that every field is filled in and the email looks like one.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && self.email.contains('@')
            && !self.address.trim().is_empty()
    }
}

/// Card fields entered by the customer. Never charged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PaymentCard {
    /// Card number, digits with optional spaces.
    pub number: String,
    /// Expiry in MM/YY form.
    pub expiry: String,
    /// Card verification value.
    pub cvv: String,
}

impl PaymentCard {
    /// Shape-check the card fields: 16 digits, MM/YY expiry, 3-digit CVV.
    pub fn is_complete(&self) -> bool {
        digit_count(&self.number) == 16 && valid_expiry(&self.expiry) && valid_cvv(&self.cvv)
    }
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

fn valid_expiry(s: &str) -> bool {
    let Some((month, year)) = s.split_once('/') else {
        return false;
    };
    if month.len() != 2 || year.len() != 2 {
        return false;
    }
    let month_ok = month
        .parse::<u8>()
        .map(|m| (1..=12).contains(&m))
        .unwrap_or(false);
    month_ok && year.chars().all(|c| c.is_ascii_digit())
}

fn valid_cvv(s: &str) -> bool {
    s.len() == 3 && s.chars().all(|c| c.is_ascii_digit())
}

/// The full checkout form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CheckoutForm {
    /// Delivery section.
    pub shipping: ShippingInfo,
    /// Payment section.
    pub payment: PaymentCard,
}

impl CheckoutForm {
    /// Check that both sections are complete.
    pub fn is_complete(&self) -> bool {
        self.shipping.is_complete() && self.payment.is_complete()
    }

    /// Whether the order can be submitted: the cart must not be empty and
    /// the form must be complete.
    pub fn can_submit(&self, cart: &Cart) -> bool {
        !cart.is_empty() && self.is_complete()
    }
}
