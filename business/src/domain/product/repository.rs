use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductDraft};
use super::value_objects::{MutationOutcome, ProductPage, ProductQuery};

/// Storage port for the product catalog.
///
/// Mutations addressed by id report a missing id through `MutationOutcome`
/// rather than an error; errors are reserved for storage failures.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_page(&self, query: &ProductQuery) -> Result<ProductPage, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;
    async fn update(&self, id: i64, draft: &ProductDraft)
    -> Result<MutationOutcome, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<MutationOutcome, RepositoryError>;
    async fn set_stock(&self, id: i64, quantity: i32) -> Result<MutationOutcome, RepositoryError>;
}
