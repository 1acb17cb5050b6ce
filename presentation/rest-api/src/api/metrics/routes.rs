use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::use_cases::metrics::GetInventoryMetricsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::metrics::dto::{CategoryMetricsResponse, into_rows};
use crate::api::tags::ApiTags;

pub struct MetricsApi {
    metrics_use_case: Arc<dyn GetInventoryMetricsUseCase>,
}

impl MetricsApi {
    pub fn new(metrics_use_case: Arc<dyn GetInventoryMetricsUseCase>) -> Self {
        Self { metrics_use_case }
    }
}

#[OpenApi(prefix_path = "/inventory")]
impl MetricsApi {
    /// Inventory metrics
    ///
    /// Returns total stock, total value and average price per category,
    /// sorted by category, followed by an "Overall" row.
    #[oai(path = "/metrics", method = "get", tag = "ApiTags::Metrics")]
    async fn get_metrics(&self) -> MetricsResponse {
        match self.metrics_use_case.execute().await {
            Ok(metrics) => MetricsResponse::Ok(Json(into_rows(metrics))),
            Err(err) => {
                let (_, json) = err.into_error_response();
                MetricsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum MetricsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryMetricsResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::application::product::metrics::GetInventoryMetricsUseCaseImpl;
    use business::domain::product::model::ProductDraft;
    use business::domain::product::repository::ProductRepository;
    use logger::TracingLogger;
    use persistence::product::memory::ProductRepositoryInMemory;
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    fn draft(name: &str, category: &str, price: f64, quantity: i32) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            category: category.to_string(),
            unit_price: price,
            quantity_in_stock: quantity,
            expiration_date: None,
        }
    }

    #[tokio::test]
    async fn should_report_rows_per_category_then_overall() {
        let repository = Arc::new(ProductRepositoryInMemory::new());
        for d in [
            draft("TV", "Electronics", 100.0, 2),
            draft("Radio", "Electronics", 40.0, 3),
            draft("Shirt", "Clothing", 20.0, 0),
        ] {
            repository.insert(&d).await.unwrap();
        }
        let api = MetricsApi::new(Arc::new(GetInventoryMetricsUseCaseImpl {
            repository,
            logger: Arc::new(TracingLogger::default()),
        }));
        let cli = TestClient::new(
            Route::new().nest("/", OpenApiService::new(api, "Inventory", "test")),
        );

        let resp = cli.get("/inventory/metrics").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let rows = json.value().array();
        assert_eq!(rows.len(), 3);

        let clothing = rows.get(0).object();
        assert_eq!(clothing.get("category").string(), "Clothing");
        assert_eq!(clothing.get("totalStock").i64(), 0);
        assert_eq!(clothing.get("averagePrice").f64(), 0.0);

        let electronics = rows.get(1).object();
        assert_eq!(electronics.get("category").string(), "Electronics");
        assert_eq!(electronics.get("totalStock").i64(), 5);
        assert_eq!(electronics.get("totalValue").f64(), 320.0);
        assert_eq!(electronics.get("averagePrice").f64(), 64.0);

        let overall = rows.get(2).object();
        assert_eq!(overall.get("category").string(), "Overall");
        assert_eq!(overall.get("totalValue").f64(), 320.0);
    }
}
