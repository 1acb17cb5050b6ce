use super::errors::ProductError;
use super::model::Product;

/// Optional constraints for listing products. `None` means the field is not
/// filtered on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive substring of the product name.
    pub name: Option<String>,
    /// Case-insensitive exact category.
    pub category: Option<String>,
    /// `true` keeps products with stock, `false` keeps sold-out products.
    pub in_stock: Option<bool>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name
            && !product.name.to_lowercase().contains(&name.to_lowercase())
        {
            return false;
        }

        if let Some(category) = &self.category
            && product.category.to_lowercase() != category.to_lowercase()
        {
            return false;
        }

        match self.in_stock {
            Some(in_stock) => product.in_stock() == in_stock,
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Category,
    UnitPrice,
    QuantityInStock,
    ExpirationDate,
    CreatedAt,
    UpdatedAt,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::Name => write!(f, "name"),
            SortField::Category => write!(f, "category"),
            SortField::UnitPrice => write!(f, "unitPrice"),
            SortField::QuantityInStock => write!(f, "quantityInStock"),
            SortField::ExpirationDate => write!(f, "expirationDate"),
            SortField::CreatedAt => write!(f, "createdAt"),
            SortField::UpdatedAt => write!(f, "updatedAt"),
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "category" => Ok(SortField::Category),
            "unitprice" | "price" => Ok(SortField::UnitPrice),
            "quantityinstock" | "stock" => Ok(SortField::QuantityInStock),
            "expirationdate" | "expiration" => Ok(SortField::ExpirationDate),
            "createdat" => Ok(SortField::CreatedAt),
            "updatedat" => Ok(SortField::UpdatedAt),
            _ => Err(ProductError::InvalidSortField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than `desc` (in any case) sorts ascending.
    pub fn parse_lenient(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSort {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for ProductSort {
    fn default() -> Self {
        Self {
            field: SortField::Name,
            order: SortOrder::Asc,
        }
    }
}

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub const DEFAULT_SIZE: u32 = 10;

    pub fn new(page: u32, size: u32) -> Result<Self, ProductError> {
        if size == 0 {
            return Err(ProductError::InvalidPageSize);
        }
        Ok(Self { page, size })
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: Self::DEFAULT_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub filter: ProductFilter,
    pub sort: ProductSort,
    pub page: PageRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub total_count: u64,
    pub page: u32,
    pub size: u32,
}

impl ProductPage {
    pub fn total_pages(&self) -> u64 {
        self.total_count.div_ceil(u64::from(self.size.max(1)))
    }
}

/// Result of a mutation addressed by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    NotFound,
}

impl MutationOutcome {
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows > 0 {
            MutationOutcome::Applied
        } else {
            MutationOutcome::NotFound
        }
    }

    pub fn into_result(self) -> Result<(), ProductError> {
        match self {
            MutationOutcome::Applied => Ok(()),
            MutationOutcome::NotFound => Err(ProductError::NotFound),
        }
    }
}
