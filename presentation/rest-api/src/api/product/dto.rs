use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::update::UpdateProductParams;
use business::domain::product::value_objects::ProductPage;

/// Product attributes sent by the client on create and update.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Product name (at most 120 characters on create)
    pub name: String,
    /// Product category
    pub category: String,
    /// Unit price (must be positive on create)
    pub unit_price: f64,
    /// Units in stock (cannot be negative on create)
    pub quantity_in_stock: i32,
    /// Expiration date, required for the "Food" category on create
    #[oai(skip_serializing_if_is_none)]
    pub expiration_date: Option<NaiveDate>,
}

impl From<ProductRequest> for CreateProductParams {
    fn from(body: ProductRequest) -> Self {
        Self {
            name: body.name,
            category: body.category,
            unit_price: body.unit_price,
            quantity_in_stock: body.quantity_in_stock,
            expiration_date: body.expiration_date,
        }
    }
}

impl ProductRequest {
    pub fn into_update_params(self, id: i64) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: self.name,
            category: self.category,
            unit_price: self.unit_price,
            quantity_in_stock: self.quantity_in_stock,
            expiration_date: self.expiration_date,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Identifier assigned by the store
    pub id: i64,
    /// Product name
    pub name: String,
    /// Product category
    pub category: String,
    /// Unit price
    pub unit_price: f64,
    /// Units in stock
    pub quantity_in_stock: i32,
    /// Whether any units are in stock
    pub in_stock: bool,
    /// Expiration date
    #[oai(skip_serializing_if_is_none)]
    pub expiration_date: Option<NaiveDate>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            in_stock: product.in_stock(),
            name: product.name,
            category: product.category,
            unit_price: product.unit_price,
            quantity_in_stock: product.quantity_in_stock,
            expiration_date: product.expiration_date,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// One page of products.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductPageResponse {
    /// Products on this page
    pub items: Vec<ProductResponse>,
    /// Number of products matching the filters
    pub total_count: u64,
    /// Zero-based page index
    pub page: u32,
    /// Page size
    pub size: u32,
    /// Number of pages at this size
    pub total_pages: u64,
}

impl From<ProductPage> for ProductPageResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            total_pages: page.total_pages(),
            total_count: page.total_count,
            page: page.page,
            size: page.size,
            items: page.items.into_iter().map(|p| p.into()).collect(),
        }
    }
}
