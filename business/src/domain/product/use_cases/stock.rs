use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct StockParams {
    pub id: i64,
}

#[async_trait]
pub trait StockUseCase: Send + Sync {
    /// Zeroes the product's quantity.
    async fn execute_mark_out_of_stock(&self, params: StockParams) -> Result<(), ProductError>;

    /// Sets the product's quantity back to the default restock quantity.
    async fn execute_restore(&self, params: StockParams) -> Result<(), ProductError>;
}
