use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::metrics::InventoryMetrics;

#[async_trait]
pub trait GetInventoryMetricsUseCase: Send + Sync {
    async fn execute(&self) -> Result<InventoryMetrics, ProductError>;
}
