//! Item repository
//!
//! - list: single ordered SELECT, no pagination
//! - create: INSERT ... RETURNING id
//! - delete: unconditional DELETE, affected-row count reported but not enforced

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::{DbError, ItemStore};
use crate::db::schema;
use crate::models::{ItemId, NewItem};

/// Item record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// PostgreSQL-backed item store
#[derive(Debug, Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn ensure_schema(&self) -> Result<(), DbError> {
        schema::ensure_schema(&self.pool).await
    }

    async fn list(&self) -> Result<Vec<Item>, DbError> {
        // The casts keep rows readable when the table predates this service
        // (TIMESTAMP column, NULL descriptions).
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT
                id,
                name,
                COALESCE(description, '') AS description,
                created_at::timestamptz AS created_at
            FROM items
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn create(&self, item: NewItem) -> Result<i32, DbError> {
        let id: i32 =
            sqlx::query_scalar("INSERT INTO items (name, description) VALUES ($1, $2) RETURNING id")
                .bind(item.name.as_str())
                .bind(&item.description)
                .fetch_one(&self.pool)
                .await?;

        tracing::debug!(id, "item created");
        Ok(id)
    }

    async fn delete(&self, id: ItemId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
