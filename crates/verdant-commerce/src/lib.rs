//! Storefront domain state for the Verdant houseplant shop.
//!
//! This crate is the state layer behind a single-page storefront:
//!
//! - **Catalog**: the seeded product list, categories, filtering
//! - **Cart**: add/remove/re-quantity with derived totals
//! - **Checkout**: form data collection and the order summary
//! - **Content**: reviews, FAQ, contacts, section anchors
//!
//! The presentation layer (out of scope here) reads the derived views and
//! calls the mutating operations on [`Storefront`](store::Storefront) in
//! response to user gestures. Everything lives in process memory; there is
//! no server, no persistence, and no payment processing.
//!
//! # Example
//!
//! ```
//! use verdant_commerce::prelude::*;
//!
//! let mut store = Storefront::seeded();
//! store.set_category_filter(CategoryFilter::Only(Category::LowMaintenance));
//!
//! let id = store.filtered_products()[0].id;
//! store.add_to_cart(id).unwrap();
//!
//! let totals = store.totals().unwrap();
//! assert_eq!(totals.item_count, 1);
//! println!("Итого: {}", totals.total_price);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod content;
pub mod store;

pub use error::StoreError;
pub use ids::{ProductId, ReviewId};
pub use money::Money;
pub use store::{StoreEvent, Storefront};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::{ProductId, ReviewId};
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategoryFilter, Product};

    // Cart
    pub use crate::cart::{Cart, CartItem, CartTotals};

    // Checkout
    pub use crate::checkout::{CheckoutForm, Delivery, OrderSummary, PaymentCard, ShippingInfo};

    // Content
    pub use crate::content::{FaqEntry, Review, Section, StoreInfo};

    // Store
    pub use crate::store::{StoreEvent, Storefront};
}
