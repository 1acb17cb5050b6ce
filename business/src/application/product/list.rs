use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use crate::domain::product::value_objects::{
    PageRequest, ProductFilter, ProductPage, ProductQuery, ProductSort, SortField, SortOrder,
};

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl ListProductsUseCaseImpl {
    fn build_query(params: ListProductsParams) -> Result<ProductQuery, ProductError> {
        Ok(ProductQuery {
            filter: ProductFilter {
                name: params.name,
                category: params.category,
                in_stock: params.in_stock,
            },
            sort: ProductSort {
                field: params.sort_by.parse::<SortField>()?,
                order: SortOrder::parse_lenient(&params.sort_order),
            },
            page: PageRequest::new(params.page, params.size)?,
        })
    }
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductPage, ProductError> {
        let query = Self::build_query(params)?;
        self.logger.debug(&format!("Listing products: {:?}", query));
        self.logger.info(&format!(
            "Listing products sorted by {} {}",
            query.sort.field, query.sort.order
        ));

        let page = self.repository.find_page(&query).await?;

        self.logger.info(&format!(
            "Found {} of {} products (page {}, size {})",
            page.items.len(),
            page.total_count,
            page.page,
            page.size
        ));
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{Product, ProductDraft};
    use crate::domain::product::value_objects::MutationOutcome;
    use chrono::Utc;
    use mockall::mock;
    use std::sync::Mutex;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn find_page(&self, query: &ProductQuery) -> Result<ProductPage, RepositoryError>;
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;
            async fn update(&self, id: i64, draft: &ProductDraft) -> Result<MutationOutcome, RepositoryError>;
            async fn delete(&self, id: i64) -> Result<MutationOutcome, RepositoryError>;
            async fn set_stock(&self, id: i64, quantity: i32) -> Result<MutationOutcome, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn recording_logger(messages: Arc<Mutex<Vec<String>>>) -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger
            .expect_info()
            .returning(move |message| messages.lock().unwrap().push(message.to_string()));
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn default_params() -> ListProductsParams {
        ListProductsParams {
            name: None,
            category: None,
            in_stock: None,
            page: 0,
            size: 10,
            sort_by: "name".to_string(),
            sort_order: "asc".to_string(),
        }
    }

    fn empty_page(query: &ProductQuery) -> ProductPage {
        ProductPage {
            items: vec![],
            total_count: 0,
            page: query.page.page,
            size: query.page.size,
        }
    }

    #[tokio::test]
    async fn should_pass_default_parameters_through() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_page()
            .withf(|query| *query == ProductQuery::default())
            .times(1)
            .returning(|query| Ok(empty_page(query)));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let page = use_case.execute(default_params()).await.unwrap();

        assert_eq!(page.page, 0);
        assert_eq!(page.size, 10);
    }

    #[tokio::test]
    async fn should_pass_filters_and_sorting_to_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_page()
            .withf(|query| {
                query.filter.name.as_deref() == Some("cream")
                    && query.filter.category.as_deref() == Some("Food")
                    && query.filter.in_stock == Some(false)
                    && query.sort.field == SortField::UnitPrice
                    && query.sort.order == SortOrder::Desc
                    && query.page == PageRequest { page: 2, size: 5 }
            })
            .times(1)
            .returning(|query| {
                let now = Utc::now();
                Ok(ProductPage {
                    items: vec![Product::from_repository(
                        11,
                        "Ice cream sandwich".to_string(),
                        "Food".to_string(),
                        237.0,
                        0,
                        None,
                        now,
                        now,
                    )],
                    total_count: 11,
                    page: query.page.page,
                    size: query.page.size,
                })
            });

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(ListProductsParams {
                name: Some("cream".to_string()),
                category: Some("Food".to_string()),
                in_stock: Some(false),
                page: 2,
                size: 5,
                sort_by: "price".to_string(),
                sort_order: "DESC".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages(), 3);
    }

    #[tokio::test]
    async fn should_reject_unknown_sort_field_before_querying() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_page().never();

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListProductsParams {
                sort_by: "colour".to_string(),
                ..default_params()
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::InvalidSortField(_)
        ));
    }

    #[tokio::test]
    async fn should_reject_zero_page_size() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_page().never();

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListProductsParams {
                size: 0,
                ..default_params()
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidPageSize));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure_on_list() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_page()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(default_params()).await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }

    #[tokio::test]
    async fn should_log_effective_sort() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_page()
            .returning(|query| Ok(empty_page(query)));
        let messages = Arc::new(Mutex::new(Vec::new()));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: recording_logger(messages.clone()),
        };

        use_case
            .execute(ListProductsParams {
                sort_by: "stock".to_string(),
                sort_order: "Desc".to_string(),
                ..default_params()
            })
            .await
            .unwrap();

        let messages = messages.lock().unwrap();
        assert!(
            messages
                .iter()
                .any(|m| m == "Listing products sorted by quantityInStock desc")
        );
    }
}
