//! HTTP Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/` - Search page (input field and rendered results)
//! - `/api/search` - Run a query (`POST {"query"}` or `GET ?q=`)
//! - `/api/health` - Health checks

pub mod health;
pub mod search;
pub mod ui;

use axum::Router;
use crate::models::AppState;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    Router::new()
        .merge(search::router(state.clone()))
        .merge(health::router(state))
        .merge(ui::router())
        .layer(TraceLayer::new_for_http())
}
