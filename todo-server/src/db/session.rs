//! Request-scoped transaction boundary
//!
//! Every repository operation runs inside exactly one transaction acquired
//! here. Sessions are never shared across requests or reused.

use futures::future::BoxFuture;
use sqlx::{PgConnection, PgPool};

use super::repos::DbError;

/// Run `op` inside a transaction.
///
/// On success the transaction commits; on failure the error is logged, the
/// transaction rolls back, and the original error propagates unchanged. The
/// connection returns to the pool on every path.
pub async fn with_transaction<T, F>(pool: &PgPool, op: F) -> Result<T, DbError>
where
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, DbError>>,
{
    let mut tx = pool.begin().await?;

    match op(&mut tx).await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            tracing::error!("Database error: {}", err);
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!("Rollback failed: {}", rollback_err);
            }
            Err(err)
        }
    }
}
