use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductPage;

/// Raw listing parameters, exactly as received from the caller.
pub struct ListProductsParams {
    pub name: Option<String>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub sort_order: String,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductPage, ProductError>;
}
