//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits and timeouts so a slow
//! or unreachable database cannot hold a request open indefinitely.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a free connection.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default server-side limit for a single statement.
const DEFAULT_STATEMENT_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool sizing and timeout settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Applied as the Postgres `statement_timeout` session option
    pub statement_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            statement_timeout: DEFAULT_STATEMENT_TIMEOUT,
        }
    }
}

/// Create a PostgreSQL connection pool with default settings.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgresql://localhost:5432/myapp_db").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_settings(database_url, PoolSettings::default()).await
}

/// Create a PostgreSQL connection pool with custom settings.
pub async fn create_pool_with_settings(
    database_url: &str,
    settings: PoolSettings,
) -> Result<PgPool, sqlx::Error> {
    let statement_timeout_ms = settings.statement_timeout.as_millis().to_string();
    let options = PgConnectOptions::from_str(database_url)?
        .options([("statement_timeout", statement_timeout_ms)]);

    tracing::debug!(
        max_connections = settings.max_connections,
        acquire_timeout_ms = settings.acquire_timeout.as_millis() as u64,
        statement_timeout_ms = settings.statement_timeout.as_millis() as u64,
        "creating database pool"
    );

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = PoolSettings::default();
        assert_eq!(settings.max_connections, 5);
        assert_eq!(settings.acquire_timeout, Duration::from_secs(5));
        assert_eq!(settings.statement_timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn invalid_url_is_rejected() {
        let result = create_pool("definitely not a database url").await;
        assert!(result.is_err());
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p itemctl-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_applies_statement_timeout() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let settings = PoolSettings {
            statement_timeout: Duration::from_millis(1500),
            ..PoolSettings::default()
        };
        let pool = create_pool_with_settings(&url, settings)
            .await
            .expect("pool creation failed");

        let (timeout,): (String,) = sqlx::query_as("SHOW statement_timeout")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(timeout, "1500ms");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i32,) = sqlx::query_as("SELECT $1::int")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i32);
        }
    }
}
