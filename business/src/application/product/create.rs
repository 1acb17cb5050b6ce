use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDraft};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let draft = ProductDraft {
            name: params.name,
            category: params.category,
            unit_price: params.unit_price,
            quantity_in_stock: params.quantity_in_stock,
            expiration_date: params.expiration_date,
        };
        self.logger.debug(&format!("Received product: {:?}", draft));

        if let Err(err) = draft.validate() {
            self.logger
                .warn(&format!("Rejected product '{}': {}", draft.name, err));
            return Err(err);
        }

        let product = self.repository.insert(&draft).await?;

        self.logger.debug(&format!("Saved product: {:?}", product));
        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
