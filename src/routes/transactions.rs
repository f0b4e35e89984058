use axum::{routing::get, Router};
use crate::handlers::{seed, transaction};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/seed", get(seed::seed_database))
        .route("/list", get(transaction::list_transactions))
        .route("/statistics", get(transaction::get_statistics))
        .route("/bar-chart", get(transaction::get_bar_chart))
        .route("/pie-chart", get(transaction::get_pie_chart))
        .route("/combined", get(transaction::get_combined))
}
