//! Product and catalog types.

use crate::catalog::{Category, CategoryFilter};
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are seeded once at construction and never mutated afterwards;
/// the cart holds its own snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Price in whole rubles.
    pub price: Money,
    /// Category this product belongs to.
    pub category: Category,
    /// URL of the product image.
    pub image: String,
    /// Short description for listings and the detail view.
    pub description: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: Category,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category,
            image: image.into(),
            description: description.into(),
        }
    }
}

/// The product catalog: an insertion-ordered, immutable product list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Create the catalog with the shop's seeded products.
    pub fn seeded() -> Self {
        Self::new(crate::catalog::seed::seed_products())
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products passing the given filter, preserving catalog order.
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Products matching a category label.
    ///
    /// Unknown labels yield an empty result rather than an error: the
    /// filter buttons are generated from the same closed set, so an
    /// unknown label can only come from stale or garbled input.
    pub fn filter_by_label(&self, label: &str) -> Vec<&Product> {
        match CategoryFilter::from_label(label) {
            Some(filter) => self.filter(filter),
            None => Vec::new(),
        }
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.get(ProductId::new(3)).is_some());
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_filter_all() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.filter(CategoryFilter::All).len(), catalog.len());
    }

    #[test]
    fn test_filter_by_category_preserves_order() {
        let catalog = Catalog::seeded();
        let filtered = catalog.filter_by_label("Неприхотливые");
        assert!(!filtered.is_empty());
        assert!(filtered
            .iter()
            .all(|p| p.category == Category::LowMaintenance));

        // Catalog order: ids must be strictly increasing in the seed data.
        let ids: Vec<i64> = filtered.iter().map(|p| p.id.value()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_filter_unknown_label_is_empty() {
        let catalog = Catalog::seeded();
        assert!(catalog.filter_by_label("Кактусы").is_empty());
    }

    #[test]
    fn test_product_json_view() {
        let catalog = Catalog::seeded();
        let product = catalog.get(ProductId::new(3)).unwrap();

        let json = serde_json::to_string(product).unwrap();
        assert!(json.contains("Сансевиерия"));

        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, product);
    }
}
