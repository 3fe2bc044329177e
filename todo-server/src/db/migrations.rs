//! Create-if-absent table setup
//!
//! No migration framework and no schema versioning: startup ensures the
//! tables exist and nothing else.

use sqlx::PgPool;

/// Ensure all tables exist.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring database tables exist...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todo (
            id SERIAL PRIMARY KEY,
            task TEXT NOT NULL,
            completed BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Legacy table: nothing routes to it, kept so existing deployments
    // retain their data.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS blog (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            published BOOLEAN NOT NULL DEFAULT TRUE,
            rating INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database tables created successfully");
    Ok(())
}
