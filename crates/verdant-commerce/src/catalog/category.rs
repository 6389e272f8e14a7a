//! Category types for the product catalog.
//!
//! The shop sorts plants into a fixed closed set of categories, so the set
//! is an enum rather than free-form strings. The storefront labels are the
//! Russian display strings of the page itself.

use crate::catalog::Product;
use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product category. The set is closed: the catalog only ever uses
/// these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Large statement plants ("Крупные растения").
    LargePlants,
    /// Plants that tolerate neglect ("Неприхотливые").
    LowMaintenance,
    /// Plants grown for their foliage ("Декоративнолистные").
    DecorativeFoliage,
}

impl Category {
    /// All categories, in the order the storefront lists them.
    pub const ALL: [Category; 3] = [
        Category::LargePlants,
        Category::LowMaintenance,
        Category::DecorativeFoliage,
    ];

    /// Get the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::LargePlants => "Крупные растения",
            Category::LowMaintenance => "Неприхотливые",
            Category::DecorativeFoliage => "Декоративнолистные",
        }
    }

    /// Parse a display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The active category filter: a single category, or the "all" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Show the full catalog ("Всё").
    #[default]
    All,
    /// Show only one category.
    Only(Category),
}

impl CategoryFilter {
    /// Label of the "all" sentinel.
    pub const ALL_LABEL: &'static str = "Всё";

    /// Get the display label.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// Parse a display label. Unknown labels yield None.
    pub fn from_label(label: &str) -> Option<Self> {
        if label == Self::ALL_LABEL {
            Some(CategoryFilter::All)
        } else {
            Category::from_label(label).map(CategoryFilter::Only)
        }
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => product.category == *c,
        }
    }

    /// All filter choices in the order the storefront shows the
    /// category buttons.
    pub fn choices() -> Vec<CategoryFilter> {
        let mut choices = vec![CategoryFilter::All];
        choices.extend(Category::ALL.into_iter().map(CategoryFilter::Only));
        choices
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| StoreError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(Category::from_label("Кактусы"), None);
        assert_eq!(CategoryFilter::from_label("Кактусы"), None);
    }

    #[test]
    fn test_filter_from_label() {
        assert_eq!(CategoryFilter::from_label("Всё"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_label("Неприхотливые"),
            Some(CategoryFilter::Only(Category::LowMaintenance))
        );
    }

    #[test]
    fn test_filter_from_str() {
        let filter: CategoryFilter = "Декоративнолистные".parse().unwrap();
        assert_eq!(filter, CategoryFilter::Only(Category::DecorativeFoliage));

        let err = "Кактусы".parse::<CategoryFilter>().unwrap_err();
        assert_eq!(err, StoreError::UnknownCategory("Кактусы".to_string()));
    }

    #[test]
    fn test_choices_order() {
        let choices = CategoryFilter::choices();
        assert_eq!(choices.len(), 4);
        assert_eq!(choices[0], CategoryFilter::All);
        assert_eq!(choices[1].label(), "Крупные растения");
    }
}
