//! Route handlers organized by resource

pub mod health;
pub mod items;

use axum::Router;

use super::server::AppState;

/// API routes: /api/*
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(items::router())
}
