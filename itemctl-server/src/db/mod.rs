//! Database layer - connection pool, schema bootstrap and the item store
//!
//! # Design Principles
//!
//! - Connection pool - no per-request connections
//! - One statement per operation - no multi-step transactions
//! - Rely on DB constraints (`VARCHAR(100)`, `NOT NULL`) as the last line of validation

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_settings, PoolSettings};
pub use repos::*;
pub use schema::ensure_schema;
