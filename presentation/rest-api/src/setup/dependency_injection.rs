use std::sync::Arc;

use logger::TracingLogger;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::metrics::GetInventoryMetricsUseCaseImpl;
use business::application::product::stock::StockUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;

use crate::api::health::routes::Api as HealthApi;
use crate::api::metrics::routes::MetricsApi;
use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub metrics_api: MetricsApi,
}

impl DependencyContainer {
    pub fn new(repository: Arc<dyn ProductRepository>, storage_backend: &'static str) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::default());
        let health_api = HealthApi::new(storage_backend);

        // Product use cases
        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let stock_use_case = Arc::new(StockUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });

        // Metrics use cases
        let metrics_use_case = Arc::new(GetInventoryMetricsUseCaseImpl { repository, logger });

        let product_api = ProductApi::new(
            list_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            stock_use_case,
        );
        let metrics_api = MetricsApi::new(metrics_use_case);

        Self {
            health_api,
            product_api,
            metrics_api,
        }
    }
}
