use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{
    MutationOutcome, ProductFilter, ProductPage, ProductQuery, ProductSort, SortField, SortOrder,
};

use super::entity::{ProductEntity, price_to_decimal};

const PRODUCT_COLUMNS: &str = "id, name, category, unit_price, quantity_in_stock, expiration_date, created_at, updated_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "Product query failed");
    RepositoryError::database_error()
}

/// Escapes LIKE wildcards so a name filter matches literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    builder.push(" WHERE TRUE");

    if let Some(name) = &filter.name {
        builder
            .push(" AND name ILIKE ")
            .push_bind(like_pattern(name));
    }

    if let Some(category) = &filter.category {
        builder
            .push(" AND LOWER(category) = LOWER(")
            .push_bind(category.clone())
            .push(")");
    }

    if let Some(in_stock) = filter.in_stock {
        builder.push(if in_stock {
            " AND quantity_in_stock > 0"
        } else {
            " AND quantity_in_stock = 0"
        });
    }
}

fn order_by_clause(sort: &ProductSort) -> String {
    let column = match sort.field {
        SortField::Name => "LOWER(name)",
        SortField::Category => "LOWER(category)",
        SortField::UnitPrice => "unit_price",
        SortField::QuantityInStock => "quantity_in_stock",
        SortField::ExpirationDate => "expiration_date",
        SortField::CreatedAt => "created_at",
        SortField::UpdatedAt => "updated_at",
    };
    let direction = match sort.order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    };
    format!(" ORDER BY {} {} NULLS LAST, id ASC", column, direction)
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_page(&self, query: &ProductQuery) -> Result<ProductPage, RepositoryError> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");
        push_filter(&mut count, &query.filter);
        let total_count: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?;

        let offset =
            i64::try_from(query.page.offset()).map_err(|_| RepositoryError::database_error())?;
        let mut select =
            QueryBuilder::<Postgres>::new(format!("SELECT {} FROM products", PRODUCT_COLUMNS));
        push_filter(&mut select, &query.filter);
        select.push(order_by_clause(&query.sort));
        select
            .push(" LIMIT ")
            .push_bind(i64::from(query.page.size))
            .push(" OFFSET ")
            .push_bind(offset);

        let entities = select
            .build_query_as::<ProductEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(ProductPage {
            items: entities
                .into_iter()
                .map(ProductEntity::into_domain)
                .collect::<Result<_, _>>()?,
            total_count: u64::try_from(total_count).unwrap_or_default(),
            page: query.page.page,
            size: query.page.size,
        })
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products ORDER BY id",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        entities
            .into_iter()
            .map(ProductEntity::into_domain)
            .collect()
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let now = Utc::now();
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            r#"INSERT INTO products (name, category, unit_price, quantity_in_stock, expiration_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING {}"#,
            PRODUCT_COLUMNS
        ))
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(price_to_decimal(draft.unit_price)?)
        .bind(draft.quantity_in_stock)
        .bind(draft.expiration_date)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        entity.into_domain()
    }

    async fn update(
        &self,
        id: i64,
        draft: &ProductDraft,
    ) -> Result<MutationOutcome, RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE products SET
                name = $1,
                category = $2,
                unit_price = $3,
                quantity_in_stock = $4,
                expiration_date = $5,
                updated_at = $6
            WHERE id = $7"#,
        )
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(price_to_decimal(draft.unit_price)?)
        .bind(draft.quantity_in_stock)
        .bind(draft.expiration_date)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(MutationOutcome::from_rows_affected(result.rows_affected()))
    }

    async fn delete(&self, id: i64) -> Result<MutationOutcome, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(MutationOutcome::from_rows_affected(result.rows_affected()))
    }

    async fn set_stock(&self, id: i64, quantity: i32) -> Result<MutationOutcome, RepositoryError> {
        let result = sqlx::query(
            "UPDATE products SET quantity_in_stock = $1, updated_at = $2 WHERE id = $3",
        )
        .bind(quantity)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(MutationOutcome::from_rows_affected(result.rows_affected()))
    }
}
