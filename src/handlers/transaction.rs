// src/handlers/transaction.rs
use axum::{extract::{Query, State}, Json};
use futures::future::try_join_all;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use crate::dtos::transaction::{
    BarChartItem, CombinedResponse, ListTransactionsQuery, MonthQuery, PieChartItem,
    StatisticsResponse, TransactionResponse,
};
use crate::error::AppError;
use crate::models::transaction::Transaction;
use crate::query::{Pagination, TransactionFilter, PRICE_BUCKETS};
use crate::state::AppState;

const TRANSACTION_COLUMNS: &str =
    "SELECT id, product_id, title, description, price, category, image, sold, date_of_sale FROM transactions";

// GET /list - Page of transactions for a month, optionally searched
#[instrument(skip(state))]
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<ListTransactionsQuery>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    fetch_transactions(&state.db_pool, &params).await.map(Json)
}

// GET /statistics - Sale total and sold/unsold counts for a month
#[instrument(skip(state))]
pub async fn get_statistics(
    State(state): State<AppState>,
    Query(params): Query<MonthQuery>,
) -> Result<Json<StatisticsResponse>, AppError> {
    fetch_statistics(&state.db_pool, params.month.as_deref()).await.map(Json)
}

// GET /bar-chart - Transaction counts per price range for a month
#[instrument(skip(state))]
pub async fn get_bar_chart(
    State(state): State<AppState>,
    Query(params): Query<MonthQuery>,
) -> Result<Json<Vec<BarChartItem>>, AppError> {
    fetch_bar_chart(&state.db_pool, params.month.as_deref()).await.map(Json)
}

// GET /pie-chart - Transaction counts per category for a month
#[instrument(skip(state))]
pub async fn get_pie_chart(
    State(state): State<AppState>,
    Query(params): Query<MonthQuery>,
) -> Result<Json<Vec<PieChartItem>>, AppError> {
    fetch_pie_chart(&state.db_pool, params.month.as_deref()).await.map(Json)
}

// GET /combined - All four reports in one payload
#[instrument(skip(state))]
pub async fn get_combined(
    State(state): State<AppState>,
    Query(params): Query<ListTransactionsQuery>,
) -> Result<Json<CombinedResponse>, AppError> {
    let db_pool = &state.db_pool;
    let month = params.month.as_deref();

    let (transactions, statistics, bar_chart, pie_chart) = tokio::try_join!(
        fetch_transactions(db_pool, &params),
        fetch_statistics(db_pool, month),
        fetch_bar_chart(db_pool, month),
        fetch_pie_chart(db_pool, month),
    )?;

    Ok(Json(CombinedResponse {
        transactions,
        statistics,
        bar_chart,
        pie_chart,
    }))
}

pub async fn fetch_transactions(
    db_pool: &PgPool,
    params: &ListTransactionsQuery,
) -> Result<Vec<TransactionResponse>, AppError> {
    let filter = TransactionFilter::for_month(params.month.as_deref())
        .with_search(params.search.as_deref());
    let pagination = Pagination::from_params(params.page.as_deref(), params.per_page.as_deref());

    let mut qb = QueryBuilder::<Postgres>::new(TRANSACTION_COLUMNS);
    filter.push_where(&mut qb);
    qb.push(" ORDER BY id");
    pagination.push_limit_offset(&mut qb);

    let transactions = qb.build_query_as::<Transaction>().fetch_all(db_pool).await?;

    Ok(transactions.into_iter().map(TransactionResponse::from).collect())
}

pub async fn fetch_statistics(
    db_pool: &PgPool,
    month: Option<&str>,
) -> Result<StatisticsResponse, AppError> {
    let filter = TransactionFilter::for_month(month);

    // Three independent reads; nothing ties them to one snapshot.
    let (total_sale_amount, total_sold_items, total_not_sold_items) = tokio::try_join!(
        sum_price(db_pool, &filter),
        count_matching(db_pool, filter.clone().with_sold(true)),
        count_matching(db_pool, filter.clone().with_sold(false)),
    )?;

    Ok(StatisticsResponse {
        total_sale_amount,
        total_sold_items,
        total_not_sold_items,
    })
}

pub async fn fetch_bar_chart(
    db_pool: &PgPool,
    month: Option<&str>,
) -> Result<Vec<BarChartItem>, AppError> {
    let filter = TransactionFilter::for_month(month);

    // try_join_all keeps input order, so bars stay ascending.
    try_join_all(PRICE_BUCKETS.iter().map(|bucket| {
        let filter = filter.clone().with_price_bucket(*bucket);
        async move {
            let count = count_matching(db_pool, filter).await?;
            Ok::<_, AppError>(BarChartItem { range: bucket.label, count })
        }
    }))
    .await
}

pub async fn fetch_pie_chart(
    db_pool: &PgPool,
    month: Option<&str>,
) -> Result<Vec<PieChartItem>, AppError> {
    let filter = TransactionFilter::for_month(month);

    let mut qb = QueryBuilder::<Postgres>::new("SELECT category, COUNT(*) AS count FROM transactions");
    filter.push_where(&mut qb);
    qb.push(" GROUP BY category ORDER BY category");

    let categories = qb.build_query_as::<PieChartItem>().fetch_all(db_pool).await?;

    Ok(categories)
}

async fn count_matching(db_pool: &PgPool, filter: TransactionFilter) -> Result<i64, AppError> {
    let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM transactions");
    filter.push_where(&mut qb);

    let count = qb.build_query_scalar::<i64>().fetch_one(db_pool).await?;
    Ok(count)
}

// SUM over zero rows is NULL; report it as 0.
async fn sum_price(db_pool: &PgPool, filter: &TransactionFilter) -> Result<f64, AppError> {
    let mut qb =
        QueryBuilder::<Postgres>::new("SELECT COALESCE(SUM(price), 0)::FLOAT8 FROM transactions");
    filter.push_where(&mut qb);

    let total = qb.build_query_scalar::<f64>().fetch_one(db_pool).await?;
    Ok(total)
}
