use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::DEFAULT_RESTOCK_QUANTITY;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::stock::{StockParams, StockUseCase};

pub struct StockUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl StockUseCaseImpl {
    async fn set_stock(&self, id: i64, quantity: i32) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Setting stock of product {} to {}", id, quantity));

        self.repository
            .set_stock(id, quantity)
            .await?
            .into_result()?;

        self.logger
            .info(&format!("Stock updated for product: {}", id));
        Ok(())
    }
}

#[async_trait]
impl StockUseCase for StockUseCaseImpl {
    async fn execute_mark_out_of_stock(&self, params: StockParams) -> Result<(), ProductError> {
        self.set_stock(params.id, 0).await
    }

    async fn execute_restore(&self, params: StockParams) -> Result<(), ProductError> {
        self.set_stock(params.id, DEFAULT_RESTOCK_QUANTITY).await
    }
}
