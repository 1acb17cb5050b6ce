use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use num_traits::{FromPrimitive, ToPrimitive};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub unit_price: BigDecimal,
    pub quantity_in_stock: i32,
    pub expiration_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let unit_price = decimal_to_price(&self.unit_price)?;
        Ok(Product::from_repository(
            self.id,
            self.name,
            self.category,
            unit_price,
            self.quantity_in_stock,
            self.expiration_date,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Converts a domain price into the NUMERIC column representation.
pub fn price_to_decimal(price: f64) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_f64(price).ok_or_else(RepositoryError::persistence)
}

/// Reads a NUMERIC column back as a domain price.
pub fn decimal_to_price(value: &BigDecimal) -> Result<f64, RepositoryError> {
    value
        .to_f64()
        .filter(|price| price.is_finite())
        .ok_or_else(RepositoryError::persistence)
}
