//! Store abstraction and its PostgreSQL implementation
//!
//! Every operation is a single statement, so each one either commits or
//! leaves nothing behind.

pub mod items;

use async_trait::async_trait;

use crate::models::{ItemId, NewItem};

pub use items::{Item, PgItemStore};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence operations for items.
///
/// The HTTP layer only talks to this trait, so handlers can be exercised
/// against any backing store.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Create the backing table if it does not exist.
    async fn ensure_schema(&self) -> Result<(), DbError>;

    /// All items, newest first. Ties on `created_at` go to the higher id.
    async fn list(&self) -> Result<Vec<Item>, DbError>;

    /// Insert an item and return its assigned id.
    async fn create(&self, item: NewItem) -> Result<i32, DbError>;

    /// Remove an item. Returns `true` if a row was deleted; a missing id is
    /// not an error.
    async fn delete(&self, id: ItemId) -> Result<bool, DbError>;
}
