use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{
    MutationOutcome, ProductPage, ProductQuery, ProductSort, SortField, SortOrder,
};

/// Process-local product store, used when no database is configured.
///
/// Ordering matches the Postgres adapter: text fields compare ignoring case,
/// missing expiration dates go last, ties fall back to ascending id.
pub struct ProductRepositoryInMemory {
    products: RwLock<BTreeMap<i64, Product>>,
    next_id: AtomicI64,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for ProductRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

fn compare(a: &Product, b: &Product, sort: &ProductSort) -> Ordering {
    let directed = |ordering: Ordering| match sort.order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    };

    let primary = match sort.field {
        SortField::Name => directed(a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortField::Category => {
            directed(a.category.to_lowercase().cmp(&b.category.to_lowercase()))
        }
        SortField::UnitPrice => directed(a.unit_price.total_cmp(&b.unit_price)),
        SortField::QuantityInStock => directed(a.quantity_in_stock.cmp(&b.quantity_in_stock)),
        SortField::ExpirationDate => match (a.expiration_date, b.expiration_date) {
            (Some(x), Some(y)) => directed(x.cmp(&y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortField::CreatedAt => directed(a.created_at.cmp(&b.created_at)),
        SortField::UpdatedAt => directed(a.updated_at.cmp(&b.updated_at)),
    };

    primary.then(a.id.cmp(&b.id))
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn find_page(&self, query: &ProductQuery) -> Result<ProductPage, RepositoryError> {
        let products = self.products.read().await;

        let mut matching: Vec<&Product> = products
            .values()
            .filter(|p| query.filter.matches(p))
            .collect();
        matching.sort_by(|a, b| compare(a, b, &query.sort));

        let offset =
            usize::try_from(query.page.offset()).map_err(|_| RepositoryError::persistence())?;
        let items = matching
            .iter()
            .skip(offset)
            .take(query.page.size as usize)
            .map(|p| (*p).clone())
            .collect();

        Ok(ProductPage {
            items,
            total_count: matching.len() as u64,
            page: query.page.page,
            size: query.page.size,
        })
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let now = Utc::now();
        let product = Product::from_repository(
            self.next_id.fetch_add(1, AtomicOrdering::SeqCst),
            draft.name.clone(),
            draft.category.clone(),
            draft.unit_price,
            draft.quantity_in_stock,
            draft.expiration_date,
            now,
            now,
        );

        self.products
            .write()
            .await
            .insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(
        &self,
        id: i64,
        draft: &ProductDraft,
    ) -> Result<MutationOutcome, RepositoryError> {
        let mut products = self.products.write().await;
        let Some(product) = products.get_mut(&id) else {
            return Ok(MutationOutcome::NotFound);
        };

        product.name = draft.name.clone();
        product.category = draft.category.clone();
        product.unit_price = draft.unit_price;
        product.quantity_in_stock = draft.quantity_in_stock;
        product.expiration_date = draft.expiration_date;
        product.updated_at = Utc::now();
        Ok(MutationOutcome::Applied)
    }

    async fn delete(&self, id: i64) -> Result<MutationOutcome, RepositoryError> {
        Ok(match self.products.write().await.remove(&id) {
            Some(_) => MutationOutcome::Applied,
            None => MutationOutcome::NotFound,
        })
    }

    async fn set_stock(&self, id: i64, quantity: i32) -> Result<MutationOutcome, RepositoryError> {
        let mut products = self.products.write().await;
        let Some(product) = products.get_mut(&id) else {
            return Ok(MutationOutcome::NotFound);
        };

        product.quantity_in_stock = quantity;
        product.updated_at = Utc::now();
        Ok(MutationOutcome::Applied)
    }
}
