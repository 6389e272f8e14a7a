//! Money type for whole-ruble amounts.
//!
//! The catalog prices in whole rubles with no minor units, so amounts are
//! plain integers. Arithmetic is checked: totals are recomputed from cart
//! contents on every read and an overflow surfaces as an error instead of
//! wrapping silently.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount in whole rubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in whole rubles.
    pub amount: i64,
}

impl Money {
    /// Create a new Money value.
    pub const fn new(amount: i64) -> Self {
        Self { amount }
    }

    /// Create a zero amount.
    pub const fn zero() -> Self {
        Self { amount: 0 }
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Try to add another amount, returning None on overflow.
    pub fn try_add(&self, other: Money) -> Option<Money> {
        self.amount.checked_add(other.amount).map(Money::new)
    }

    /// Try to multiply by a scalar, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount.checked_mul(factor).map(Money::new)
    }

    /// Sum an iterator of amounts, returning None on overflow.
    pub fn try_sum(iter: impl Iterator<Item = Money>) -> Option<Money> {
        let mut total = Money::zero();
        for m in iter {
            total = total.try_add(m)?;
        }
        Some(total)
    }

    /// Format as a display string (e.g., "3 290 ₽").
    ///
    /// Thousands groups are separated by spaces, the way the storefront
    /// renders prices.
    pub fn display(&self) -> String {
        let sign = if self.amount < 0 { "-" } else { "" };
        format!("{}{} \u{20bd}", sign, group_digits(self.amount.unsigned_abs()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Group a digit string into thousands separated by spaces.
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(*b as char);
    }
    out
}
