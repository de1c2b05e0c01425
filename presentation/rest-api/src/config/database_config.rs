use std::env;
use std::sync::Arc;
use std::time::Duration;

use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::in_memory::InMemoryProductRepository;
use persistence::product::repository::ProductRepositoryPostgres;

/// Product store settings
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string; the in-memory store is used when unset
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_ACQUIRE_TIMEOUT_SECS: pool acquire timeout (default: 30)
/// - DATABASE_MIGRATIONS_PATH: migrations directory (default: "migrations")
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub migrations_path: String,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparsable setting");
            default
        }),
        Err(_) => default,
    }
}

impl DatabaseSettings {
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", 5),
            acquire_timeout: Duration::from_secs(env_or("DATABASE_ACQUIRE_TIMEOUT_SECS", 30)),
            migrations_path: env::var("DATABASE_MIGRATIONS_PATH")
                .unwrap_or_else(|_| "migrations".to_string()),
        }
    }
}

/// Builds the product store: PostgreSQL (with migrations applied) when a
/// database URL is configured, otherwise an in-memory store.
///
/// # Errors
/// Returns error if the connection or the migrations fail
pub async fn init_product_repository(
    settings: &DatabaseSettings,
) -> anyhow::Result<Arc<dyn ProductRepository>> {
    let Some(url) = &settings.url else {
        tracing::warn!("DATABASE_URL not set, products are kept in memory only");
        return Ok(Arc::new(InMemoryProductRepository::new()));
    };

    let config = DatabaseConfig {
        connection_string: url.clone(),
        max_connections: settings.max_connections,
        acquire_timeout: settings.acquire_timeout,
    };
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    tracing::info!(
        max_connections = settings.max_connections,
        "Connected to PostgreSQL product store"
    );

    Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
}
