// src/state.rs
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub http_client: reqwest::Client,
    pub seed_url: String,
}

impl AppState {
    pub fn new(db_pool: PgPool, seed_url: String) -> Self {
        Self {
            db_pool,
            http_client: reqwest::Client::new(),
            seed_url,
        }
    }
}
