//! Shopping cart module.
//!
//! Contains the cart, cart item, and totals types.

mod cart;
mod pricing;

pub use cart::{Cart, CartItem};
pub use pricing::CartTotals;
