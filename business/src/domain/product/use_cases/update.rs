use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::product::errors::ProductError;

/// Full replacement of a product's mutable fields.
pub struct UpdateProductParams {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub quantity_in_stock: i32,
    pub expiration_date: Option<NaiveDate>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<(), ProductError>;
}
