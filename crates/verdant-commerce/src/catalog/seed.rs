//! Seed data for the shop catalog.
//!
//! The storefront has no backend: the six products below are the whole
//! inventory, created once at startup.

use crate::catalog::{Category, Product};
use crate::ids::ProductId;
use crate::money::Money;

/// The shop's product list, in display order.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(
            ProductId::new(1),
            "Монстера Деликатесная",
            Money::new(3200),
            Category::LargePlants,
            "https://images.unsplash.com/photo-1512428559087-560fa5ceab42?w=500",
            "Элегантное растение с резными листьями. Высота 80-100 см.",
        ),
        Product::new(
            ProductId::new(2),
            "Фикус Лирата",
            Money::new(4500),
            Category::LargePlants,
            "https://images.unsplash.com/photo-1545241047-6083a3684587?w=500",
            "Дерево со скрипичными листьями. Идеально для гостиной.",
        ),
        Product::new(
            ProductId::new(3),
            "Сансевиерия",
            Money::new(1200),
            Category::LowMaintenance,
            "https://cdn.poehali.dev/files/e792541c-92f9-4337-a110-afa7d38758a7.png",
            "Теневыносливое растение, не требует частого полива.",
        ),
        Product::new(
            ProductId::new(4),
            "Суккуленты в горшке",
            Money::new(890),
            Category::LowMaintenance,
            "https://images.unsplash.com/photo-1459156212016-c812468e2115?w=500",
            "Композиция из 3-5 суккулентов в керамическом горшке.",
        ),
        Product::new(
            ProductId::new(5),
            "Калатея Орната",
            Money::new(2100),
            Category::DecorativeFoliage,
            "https://cdn.poehali.dev/files/7f3755d1-4f61-491d-9d6f-912937fa5a3d.png",
            "Растение с узорчатыми листьями, очищает воздух.",
        ),
        Product::new(
            ProductId::new(6),
            "Замиокулькас",
            Money::new(2800),
            Category::LowMaintenance,
            "https://cdn.poehali.dev/files/175f1d09-fed7-4001-bc6c-8bc49fea2cc4.png",
            "Долларовое дерево — символ богатства и благополучия.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_unique() {
        let products = seed_products();
        let ids: HashSet<i64> = products.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_seed_prices_positive() {
        for product in seed_products() {
            assert!(product.price.amount > 0, "{} has no price", product.name);
        }
    }
}
