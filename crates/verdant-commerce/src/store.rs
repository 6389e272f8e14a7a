//! The storefront state manager.
//!
//! [`Storefront`] owns everything the page needs: the seeded catalog, the
//! active category filter, the selected product (detail view), and the
//! cart. The presentation layer reads the derived views and calls the
//! mutating operations in response to user gestures; it learns about side
//! effects (such as the cart panel opening after an add) by draining the
//! event queue.
//!
//! Everything is synchronous and single-threaded: one gesture, one call.

use crate::cart::{Cart, CartItem, CartTotals};
use crate::catalog::{Catalog, CategoryFilter, Product};
use crate::error::StoreError;
use crate::ids::ProductId;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Events the presentation layer may react to.
///
/// Opening the cart panel after an add is a presentation concern, so the
/// store records it as an event instead of doing anything itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The cart panel should be shown.
    CartOpened,
}

/// In-memory state for the storefront page.
#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    filter: CategoryFilter,
    selected: Option<ProductId>,
    cart: Cart,
    events: VecDeque<StoreEvent>,
}

impl Storefront {
    /// Create a storefront over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: CategoryFilter::All,
            selected: None,
            cart: Cart::new(),
            events: VecDeque::new(),
        }
    }

    /// Create a storefront with the shop's seeded catalog.
    pub fn seeded() -> Self {
        Self::new(Catalog::seeded())
    }

    // ------------------------------------------------------------------
    // Catalog and filtering
    // ------------------------------------------------------------------

    /// The full catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The active category filter.
    pub fn category_filter(&self) -> CategoryFilter {
        self.filter
    }

    /// The filter choices for the category buttons, in display order.
    pub fn category_choices(&self) -> Vec<CategoryFilter> {
        CategoryFilter::choices()
    }

    /// Set the active category filter.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        trace!(filter = filter.label(), "category filter changed");
        self.filter = filter;
    }

    /// Set the filter from a display label.
    ///
    /// Unknown labels leave the filter untouched and return false; the
    /// buttons are generated from the closed category set, so this only
    /// happens with stale input.
    pub fn set_category_label(&mut self, label: &str) -> bool {
        match CategoryFilter::from_label(label) {
            Some(filter) => {
                self.set_category_filter(filter);
                true
            }
            None => false,
        }
    }

    /// Products passing the active filter, in catalog order.
    pub fn filtered_products(&self) -> Vec<&Product> {
        self.catalog.filter(self.filter)
    }

    // ------------------------------------------------------------------
    // Product selection (detail view)
    // ------------------------------------------------------------------

    /// Select a product for the detail view.
    pub fn select_product(&mut self, id: ProductId) -> Result<(), StoreError> {
        if self.catalog.get(id).is_none() {
            return Err(StoreError::ProductNotFound(id));
        }
        trace!(product_id = id.value(), "product selected");
        self.selected = Some(id);
        Ok(())
    }

    /// Clear the detail-view selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The currently selected product, if any.
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.and_then(|id| self.catalog.get(id))
    }

    // ------------------------------------------------------------------
    // Cart operations
    // ------------------------------------------------------------------

    /// Add one unit of a catalog product to the cart.
    ///
    /// Emits [`StoreEvent::CartOpened`] so the presentation layer can
    /// show the cart panel.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<(), StoreError> {
        let product = self
            .catalog
            .get(id)
            .cloned()
            .ok_or(StoreError::ProductNotFound(id))?;
        self.cart.add(&product)?;
        debug!(product = %product.name, "added to cart");
        self.events.push_back(StoreEvent::CartOpened);
        Ok(())
    }

    /// Remove a product from the cart. Absent products are a no-op.
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        let removed = self.cart.remove(id);
        if removed {
            debug!(product_id = id.value(), "removed from cart");
        }
        removed
    }

    /// Set a cart item's quantity; zero or below removes the item.
    /// Absent products are a no-op.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        let changed = self.cart.set_quantity(id, quantity);
        if changed {
            debug!(product_id = id.value(), quantity, "quantity updated");
        }
        changed
    }

    /// Items in the cart, in first-add order.
    pub fn cart_items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// The cart itself.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current cart totals, recomputed from the cart contents.
    pub fn totals(&self) -> Result<CartTotals, StoreError> {
        self.cart.totals()
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Drain pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        self.events.drain(..).collect()
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::seeded()
    }
}
