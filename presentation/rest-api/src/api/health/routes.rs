use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Product store in use ("postgres" or "memory")
    pub storage: String,
}

/// Liveness endpoint for probes and load balancers.
pub struct Api {
    storage: &'static str,
}

impl Api {
    pub fn new(storage: &'static str) -> Self {
        Self { storage }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns "healthy" while the service is running, along with the
    /// current timestamp in RFC 3339, the service version and the storage
    /// backend selected at startup.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            storage: self.storage.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    #[tokio::test]
    async fn should_report_healthy_with_storage_backend() {
        let service = OpenApiService::new(Api::new("memory"), "Inventory", "test");
        let cli = TestClient::new(Route::new().nest("/", service));

        let resp = cli.get("/health").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        assert_eq!(body.get("status").string(), "healthy");
        assert_eq!(body.get("storage").string(), "memory");
        assert_eq!(body.get("version").string(), env!("CARGO_PKG_VERSION"));
    }
}
