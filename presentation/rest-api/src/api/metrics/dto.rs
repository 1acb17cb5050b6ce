use poem_openapi::Object;

use business::domain::product::metrics::{CategoryMetrics, InventoryMetrics};

/// Stock figures for one category, or for the whole inventory.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CategoryMetricsResponse {
    /// Category name, "Overall" for the aggregate row
    pub category: String,
    /// Sum of quantities in stock
    pub total_stock: i64,
    /// Sum of unit price times quantity
    pub total_value: f64,
    /// Total value divided by total stock, 0 when nothing is in stock
    pub average_price: f64,
}

impl From<CategoryMetrics> for CategoryMetricsResponse {
    fn from(metrics: CategoryMetrics) -> Self {
        Self {
            category: metrics.category,
            total_stock: metrics.total_stock,
            total_value: metrics.total_value,
            average_price: metrics.average_price,
        }
    }
}

/// Flattens the per-category rows, keeping the aggregate row last.
pub fn into_rows(metrics: InventoryMetrics) -> Vec<CategoryMetricsResponse> {
    metrics
        .categories
        .into_iter()
        .chain(std::iter::once(metrics.overall))
        .map(CategoryMetricsResponse::from)
        .collect()
}
