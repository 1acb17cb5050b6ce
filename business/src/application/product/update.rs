use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductDraft;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    /// Replaces every mutable field. Unlike creation, the replacement record
    /// is stored as received.
    async fn execute(&self, params: UpdateProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let draft = ProductDraft {
            name: params.name,
            category: params.category,
            unit_price: params.unit_price,
            quantity_in_stock: params.quantity_in_stock,
            expiration_date: params.expiration_date,
        };

        self.repository
            .update(params.id, &draft)
            .await?
            .into_result()?;

        self.logger
            .info(&format!("Product updated: {}", params.id));
        Ok(())
    }
}
