use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use business::domain::product::use_cases::stock::{StockParams, StockUseCase};
use business::domain::product::use_cases::update::UpdateProductUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductPageResponse, ProductRequest, ProductResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    list_use_case: Arc<dyn ListProductsUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    stock_use_case: Arc<dyn StockUseCase>,
}

impl ProductApi {
    pub fn new(
        list_use_case: Arc<dyn ListProductsUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        stock_use_case: Arc<dyn StockUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            stock_use_case,
        }
    }
}

/// Product inventory API
///
/// Endpoints for listing, creating, updating and deleting products, and for
/// toggling their stock.
#[OpenApi(prefix_path = "/inventory")]
impl ProductApi {
    /// List products
    ///
    /// Returns one page of products matching the optional filters.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    #[allow(clippy::too_many_arguments)]
    async fn list_products(
        &self,
        /// Case-insensitive substring of the product name
        name: Query<Option<String>>,
        /// Exact category, ignoring case
        category: Query<Option<String>>,
        /// Keep only products with (true) or without (false) stock
        #[oai(name = "inStock")]
        in_stock: Query<Option<bool>>,
        /// Zero-based page index (default: 0)
        page: Query<Option<u32>>,
        /// Page size (default: 10)
        size: Query<Option<u32>>,
        /// Field to sort by (default: "name")
        #[oai(name = "sortBy")]
        sort_by: Query<Option<String>>,
        /// "asc" or "desc" (default: "asc")
        #[oai(name = "sortOrder")]
        sort_order: Query<Option<String>>,
    ) -> ListProductsResponse {
        let params = ListProductsParams {
            name: name.0,
            category: category.0,
            in_stock: in_stock.0,
            page: page.0.unwrap_or(0),
            size: size.0.unwrap_or(10),
            sort_by: sort_by.0.unwrap_or_else(|| "name".to_string()),
            sort_order: sort_order.0.unwrap_or_else(|| "asc".to_string()),
        };

        match self.list_use_case.execute(params).await {
            Ok(page) => ListProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListProductsResponse::BadRequest(json),
                    _ => ListProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product
    ///
    /// Validates the product and stores it, returning the stored record with
    /// its assigned id.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn add_product(&self, body: Json<ProductRequest>) -> AddProductResponse {
        match self.create_use_case.execute(body.0.into()).await {
            Ok(product) => AddProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddProductResponse::BadRequest(json),
                    _ => AddProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces every field of an existing product.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<i64>,
        body: Json<ProductRequest>,
    ) -> MutationResponse {
        let result = self
            .update_use_case
            .execute(body.0.into_update_params(id.0))
            .await;
        MutationResponse::from_result(result)
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<i64>) -> MutationResponse {
        let result = self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await;
        MutationResponse::from_result(result)
    }

    /// Mark a product out of stock
    ///
    /// Sets the product's quantity to zero.
    #[oai(
        path = "/products/:id/outofstock",
        method = "post",
        tag = "ApiTags::Products"
    )]
    async fn mark_out_of_stock(&self, id: Path<i64>) -> MutationResponse {
        let result = self
            .stock_use_case
            .execute_mark_out_of_stock(StockParams { id: id.0 })
            .await;
        MutationResponse::from_result(result)
    }

    /// Restore a product's stock
    ///
    /// Sets the product's quantity back to the default restock quantity.
    #[oai(
        path = "/products/:id/instock",
        method = "put",
        tag = "ApiTags::Products"
    )]
    async fn restore_stock(&self, id: Path<i64>) -> MutationResponse {
        let result = self
            .stock_use_case
            .execute_restore(StockParams { id: id.0 })
            .await;
        MutationResponse::from_result(result)
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Response of mutations addressed by product id. Both 200 and 404 carry no
/// body.
#[derive(poem_openapi::ApiResponse)]
pub enum MutationResponse {
    #[oai(status = 200)]
    Ok,
    #[oai(status = 404)]
    NotFound,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl MutationResponse {
    fn from_result(result: Result<(), ProductError>) -> Self {
        match result {
            Ok(()) => MutationResponse::Ok,
            Err(ProductError::NotFound) => MutationResponse::NotFound,
            Err(err) => {
                let (_, json) = err.into_error_response();
                MutationResponse::InternalError(json)
            }
        }
    }
}
