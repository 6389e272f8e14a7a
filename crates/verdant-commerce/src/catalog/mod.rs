//! Product catalog module.
//!
//! Contains the product and category types plus the seeded shop catalog.

mod category;
mod product;
pub mod seed;

pub use category::{Category, CategoryFilter};
pub use product::{Catalog, Product};
