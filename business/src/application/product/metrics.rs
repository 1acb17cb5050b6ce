use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::metrics::{InventoryMetrics, summarize};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::metrics::GetInventoryMetricsUseCase;

pub struct GetInventoryMetricsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetInventoryMetricsUseCase for GetInventoryMetricsUseCaseImpl {
    async fn execute(&self) -> Result<InventoryMetrics, ProductError> {
        self.logger.info("Computing inventory metrics");
        let products = self.repository.get_all().await?;
        let metrics = summarize(&products);
        self.logger.info(&format!(
            "Computed metrics for {} categories",
            metrics.categories.len()
        ));
        Ok(metrics)
    }
}
