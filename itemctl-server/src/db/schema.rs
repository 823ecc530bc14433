//! Schema bootstrap for the items table

use sqlx::PgPool;

use super::DbError;

/// Create the `items` table and its ordering index if they are missing.
///
/// Safe to run on every start. Existing tables and rows are left untouched,
/// including tables created by older deployments with a `TIMESTAMP`
/// `created_at` column.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring items schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            description TEXT DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_items_created ON items(created_at DESC)")
        .execute(pool)
        .await?;

    tracing::info!("Items schema ready");
    Ok(())
}
