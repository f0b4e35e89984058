// src/handlers/seed.rs
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{error, info, instrument};

use crate::dtos::transaction::SeedTransaction;
use crate::error::AppError;
use crate::state::AppState;

// Postgres allows at most 65535 bind parameters per statement; 8 per row.
const INSERT_CHUNK_ROWS: usize = 5_000;

// GET /seed - Load the remote dataset into the store
#[instrument(skip(state))]
pub async fn seed_database(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match fetch_and_seed(&state).await {
        Ok(inserted) => {
            info!(inserted, "Database seeded");
            (StatusCode::OK, "Database seeded successfully")
        }
        Err(e) => {
            error!(error = %e, seed_url = %state.seed_url, "Failed to seed database");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error seeding database")
        }
    }
}

async fn fetch_and_seed(state: &AppState) -> Result<u64, AppError> {
    let records = state
        .http_client
        .get(&state.seed_url)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<SeedTransaction>>()
        .await?;

    insert_transactions(&state.db_pool, &records).await
}

/// Inserts every record as a new row. Nothing is deduplicated, so seeding the
/// same dataset twice stores each record twice.
pub async fn insert_transactions(
    db_pool: &PgPool,
    records: &[SeedTransaction],
) -> Result<u64, AppError> {
    let mut tx = db_pool.begin().await?;
    let mut inserted = 0;

    for chunk in records.chunks(INSERT_CHUNK_ROWS) {
        let mut qb = QueryBuilder::<Postgres>::new(
            "INSERT INTO transactions (product_id, title, description, price, category, image, sold, date_of_sale) ",
        );
        qb.push_values(chunk, |mut row, record| {
            row.push_bind(record.id)
                .push_bind(record.title.as_str())
                .push_bind(record.description.as_str())
                .push_bind(record.price)
                .push_bind(record.category.as_str())
                .push_bind(record.image.as_deref())
                .push_bind(record.sold)
                .push_bind(record.date_of_sale.with_timezone(&Utc));
        });

        inserted += qb.build().execute(&mut *tx).await?.rows_affected();
    }

    tx.commit().await?;

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;

    fn dataset() -> serde_json::Value {
        json!([
            {
                "id": 1,
                "title": "Fjallraven  Foldsack No 1 Backpack, Fits 15 Laptops",
                "price": 329.85,
                "description": "Your perfect pack for everyday use and walks in the forest.",
                "category": "men's clothing",
                "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
                "sold": false,
                "dateOfSale": "2021-11-27T20:29:54+05:30"
            },
            {
                "id": 2,
                "title": "Mens Casual Premium Slim Fit T-Shirts",
                "price": 44.6,
                "description": "Slim-fitting style, contrast raglan long sleeve.",
                "category": "men's clothing",
                "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
                "sold": true,
                "dateOfSale": "2021-10-27T20:29:54+05:30"
            }
        ])
    }

    async fn serve_dataset(body: serde_json::Value) -> String {
        let app = Router::new().route("/data.json", get(move || {
            let body = body.clone();
            async move { Json(body) }
        }));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}/data.json")
    }

    fn lazy_pool() -> PgPool {
        sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap()
    }

    #[tokio::test]
    async fn unreachable_dataset_reports_failure() {
        let state = AppState::new(lazy_pool(), "http://127.0.0.1:9/missing.json".to_string());

        let (status, body) = seed_database(State(state)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error seeding database");
    }

    #[tokio::test]
    async fn malformed_dataset_reports_failure() {
        let url = serve_dataset(json!({ "not": "an array" })).await;
        let state = AppState::new(lazy_pool(), url);

        let (status, body) = seed_database(State(state)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error seeding database");
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "Requires a running PostgreSQL database (DATABASE_URL)"]
    async fn seeding_twice_duplicates_every_record(pool: PgPool) {
        let url = serve_dataset(dataset()).await;
        let state = AppState::new(pool.clone(), url);

        assert_eq!(seed_database(State(state.clone())).await.0, StatusCode::OK);
        assert_eq!(seed_database(State(state)).await.0, StatusCode::OK);

        let per_product: Vec<(Option<i64>, i64)> = sqlx::query_as(
            "SELECT product_id, COUNT(*) FROM transactions GROUP BY product_id ORDER BY product_id",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(per_product, vec![(Some(1), 2), (Some(2), 2)]);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "Requires a running PostgreSQL database (DATABASE_URL)"]
    async fn negative_prices_are_rejected_by_the_store(pool: PgPool) {
        let records: Vec<SeedTransaction> = serde_json::from_value(json!([{
            "title": "Refund",
            "price": -5.0,
            "category": "misc",
            "dateOfSale": "2022-01-01T00:00:00Z"
        }]))
        .unwrap();

        assert!(insert_transactions(&pool, &records).await.is_err());

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
