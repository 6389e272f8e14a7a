//! Storefront error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Missing cart items are deliberately not errors: removing or re-quantifying
/// a product that is not in the cart is a no-op, matching how the storefront
/// behaves. Only operations that reference the catalog or perform money
/// arithmetic can fail.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Unknown category label.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
