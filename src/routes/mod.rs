pub mod transactions;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use crate::error::AppError;
use crate::state::AppState;

pub const API_BASE_PATH: &str = "/api/transactions";

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Transaction Reports API" }))
        .route("/health", get(health_check))
        .nest(API_BASE_PATH, transactions::routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> AppError {
    AppError::not_found("Not found")
}
