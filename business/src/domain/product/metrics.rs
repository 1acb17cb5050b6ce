use std::collections::BTreeMap;

use super::model::Product;

/// Label of the row aggregating every category.
pub const OVERALL_CATEGORY: &str = "Overall";

/// Stock figures for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMetrics {
    pub category: String,
    pub total_stock: i64,
    pub total_value: f64,
    pub average_price: f64,
}

impl CategoryMetrics {
    fn empty(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            total_stock: 0,
            total_value: 0.0,
            average_price: 0.0,
        }
    }

    fn add(&mut self, product: &Product) {
        self.total_stock += i64::from(product.quantity_in_stock);
        self.total_value += product.stock_value();
    }

    fn finish(mut self) -> Self {
        // Weighted by units on hand; sold-out categories report zero
        self.average_price = if self.total_stock > 0 {
            self.total_value / self.total_stock as f64
        } else {
            0.0
        };
        self
    }
}

/// Per-category metrics sorted by category, followed by the overall row.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryMetrics {
    pub categories: Vec<CategoryMetrics>,
    pub overall: CategoryMetrics,
}

/// Aggregates stock count, stock value and average unit price per category.
pub fn summarize(products: &[Product]) -> InventoryMetrics {
    let mut by_category: BTreeMap<&str, CategoryMetrics> = BTreeMap::new();
    let mut overall = CategoryMetrics::empty(OVERALL_CATEGORY);

    for product in products {
        by_category
            .entry(product.category.as_str())
            .or_insert_with(|| CategoryMetrics::empty(product.category.clone()))
            .add(product);
        overall.add(product);
    }

    InventoryMetrics {
        categories: by_category
            .into_values()
            .map(CategoryMetrics::finish)
            .collect(),
        overall: overall.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(category: &str, price: f64, quantity: i32) -> Product {
        let now = Utc::now();
        Product::from_repository(
            1,
            "Item".to_string(),
            category.to_string(),
            price,
            quantity,
            None,
            now,
            now,
        )
    }

    #[test]
    fn should_return_zeroed_overall_for_empty_inventory() {
        let metrics = summarize(&[]);

        assert!(metrics.categories.is_empty());
        assert_eq!(metrics.overall, CategoryMetrics::empty(OVERALL_CATEGORY));
    }

    #[test]
    fn should_group_by_category_in_name_order() {
        let metrics = summarize(&[
            product("Food", 1.5, 4),
            product("Electronics", 900.0, 10),
            product("Food", 8.0, 7),
        ]);

        let names: Vec<&str> = metrics
            .categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(names, vec!["Electronics", "Food"]);

        let food = &metrics.categories[1];
        assert_eq!(food.total_stock, 11);
        assert_eq!(food.total_value, 62.0);
        assert!((food.average_price - 62.0 / 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_weight_overall_average_by_stock() {
        let metrics = summarize(&[product("Food", 2.0, 1), product("Clothing", 10.0, 3)]);

        assert_eq!(metrics.overall.total_stock, 4);
        assert_eq!(metrics.overall.total_value, 32.0);
        assert_eq!(metrics.overall.average_price, 8.0);
    }

    #[test]
    fn should_report_zero_average_for_sold_out_category() {
        let metrics = summarize(&[product("Clothing", 305.0, 0)]);

        assert_eq!(metrics.categories[0].total_stock, 0);
        assert_eq!(metrics.categories[0].average_price, 0.0);
    }
}
