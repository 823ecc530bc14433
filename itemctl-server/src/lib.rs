//! itemctl-server: HTTP API over a single PostgreSQL `items` table
//!
//! - `db`: connection pool, schema bootstrap, and the [`ItemStore`] seam
//! - `models`: validated request-side types
//! - `http`: axum router, extractors, and JSON error mapping

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, Item, ItemStore, PgItemStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
