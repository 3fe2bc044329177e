//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Pooled connections are
//! liveness-checked before reuse and recycled after five minutes so a long
//! idle period never hands a handler a stale connection.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Kept low for a single-table service.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Maximum age of a pooled connection before it is recycled.
const CONNECTION_MAX_LIFETIME: Duration = Duration::from_secs(300);

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/todos").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with a custom connection limit.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .test_before_acquire(true)
        .max_lifetime(CONNECTION_MAX_LIFETIME)
        .connect(database_url)
        .await
}
