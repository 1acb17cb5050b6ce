use chrono::{DateTime, NaiveDate, Utc};

use super::errors::ProductError;

pub const MAX_NAME_LENGTH: usize = 120;

/// Category that requires an expiration date, compared case-insensitively.
pub const PERISHABLE_CATEGORY: &str = "Food";

/// Quantity a product gets back when its stock is restored.
pub const DEFAULT_RESTOCK_QUANTITY: i32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub quantity_in_stock: i32,
    pub expiration_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product attributes supplied by a client. The store assigns the id and
/// timestamps when a draft is inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub quantity_in_stock: i32,
    pub expiration_date: Option<NaiveDate>,
}

impl ProductDraft {
    /// Checks the creation rules in order, reporting the first one violated.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.chars().count() > MAX_NAME_LENGTH {
            return Err(ProductError::NameTooLong);
        }

        // NaN fails this check as well
        if !(self.unit_price > 0.0) {
            return Err(ProductError::PriceNotPositive);
        }

        if self.quantity_in_stock < 0 {
            return Err(ProductError::NegativeStock);
        }

        if self.is_perishable() && self.expiration_date.is_none() {
            return Err(ProductError::ExpirationDateRequired);
        }

        Ok(())
    }

    pub fn is_perishable(&self) -> bool {
        self.category.eq_ignore_ascii_case(PERISHABLE_CATEGORY)
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: i64,
        name: String,
        category: String,
        unit_price: f64,
        quantity_in_stock: i32,
        expiration_date: Option<NaiveDate>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            category,
            unit_price,
            quantity_in_stock,
            expiration_date,
            created_at,
            updated_at,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.quantity_in_stock > 0
    }

    /// Value of the units currently on hand.
    pub fn stock_value(&self) -> f64 {
        self.unit_price * f64::from(self.quantity_in_stock)
    }
}
