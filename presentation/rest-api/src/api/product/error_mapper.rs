use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameTooLong => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_too_long",
            ),
            ProductError::PriceNotPositive => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_not_positive",
            ),
            ProductError::NegativeStock => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.negative_stock",
            ),
            ProductError::ExpirationDateRequired => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.expiration_date_required",
            ),
            ProductError::InvalidSortField(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_sort_field",
            ),
            ProductError::InvalidPageSize => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_page_size",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::Repository(err) => {
                tracing::error!(error = %err, "Product repository failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "repository.persistence",
                )
            }
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
