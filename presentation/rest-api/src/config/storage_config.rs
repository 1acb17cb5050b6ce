use std::env;
use std::sync::Arc;

use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;

use super::error::ConfigError;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Where products are stored.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    Postgres {
        url: String,
        max_connections: u32,
        migrations_path: String,
    },
    InMemory,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (optional; in-memory storage when unset)
    /// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
    /// - MIGRATIONS_PATH: Migrations directory (default: "infrastructure/persistence/migrations")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("DATABASE_URL").ok(),
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            env::var("MIGRATIONS_PATH").ok(),
        )
    }

    fn from_vars(
        url: Option<String>,
        max_connections: Option<String>,
        migrations_path: Option<String>,
    ) -> Result<Self, ConfigError> {
        let Some(url) = url.filter(|u| !u.trim().is_empty()) else {
            return Ok(StorageConfig::InMemory);
        };

        let max_connections = match max_connections {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidMaxConnections(raw))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(StorageConfig::Postgres {
            url,
            max_connections,
            migrations_path: migrations_path
                .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
        })
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            StorageConfig::Postgres { .. } => "postgres",
            StorageConfig::InMemory => "memory",
        }
    }
}

/// Builds the product repository for the configured backend
///
/// # Errors
/// Returns error if the database connection or migrations fail
pub async fn init_repository(config: &StorageConfig) -> anyhow::Result<Arc<dyn ProductRepository>> {
    match config {
        StorageConfig::Postgres {
            url,
            max_connections,
            migrations_path,
        } => {
            let db_config =
                DatabaseConfig::new(url.clone()).with_max_connections(*max_connections);
            let pool = create_postgres_pool(&db_config).await?;
            run_migrations(&pool, migrations_path).await?;
            Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
        }
        StorageConfig::InMemory => {
            tracing::warn!("DATABASE_URL not set, products are kept in memory");
            Ok(Arc::new(ProductRepositoryInMemory::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_memory_when_database_url_missing() {
        let config = StorageConfig::from_vars(None, None, None).unwrap();

        assert_eq!(config, StorageConfig::InMemory);
        assert_eq!(config.backend_name(), "memory");
    }

    #[test]
    fn should_use_memory_when_database_url_blank() {
        let config = StorageConfig::from_vars(Some("  ".to_string()), None, None).unwrap();

        assert_eq!(config, StorageConfig::InMemory);
    }

    #[test]
    fn should_use_postgres_with_defaults() {
        let config = StorageConfig::from_vars(
            Some("postgres://localhost/inventory".to_string()),
            None,
            None,
        )
        .unwrap();

        assert_eq!(
            config,
            StorageConfig::Postgres {
                url: "postgres://localhost/inventory".to_string(),
                max_connections: 5,
                migrations_path: DEFAULT_MIGRATIONS_PATH.to_string(),
            }
        );
    }

    #[test]
    fn should_reject_zero_max_connections() {
        let result = StorageConfig::from_vars(
            Some("postgres://localhost/inventory".to_string()),
            Some("0".to_string()),
            None,
        );

        assert!(matches!(result, Err(ConfigError::InvalidMaxConnections(_))));
    }

    #[tokio::test]
    async fn should_build_in_memory_repository() {
        let repository = init_repository(&StorageConfig::InMemory).await.unwrap();

        assert!(repository.get_all().await.unwrap().is_empty());
    }
}
