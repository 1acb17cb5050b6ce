#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_too_long")]
    NameTooLong,
    #[error("product.price_not_positive")]
    PriceNotPositive,
    #[error("product.negative_stock")]
    NegativeStock,
    #[error("product.expiration_date_required")]
    ExpirationDateRequired,
    #[error("product.invalid_sort_field")]
    InvalidSortField(String),
    #[error("product.invalid_page_size")]
    InvalidPageSize,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

