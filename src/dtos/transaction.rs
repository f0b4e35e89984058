// src/dtos/transaction.rs
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::models::transaction::Transaction;

/// Query string accepted by `/list` and `/combined`.
///
/// Paging values are kept as text and coerced leniently by
/// [`crate::query::Pagination::from_params`].
#[derive(Debug, Default, Deserialize)]
pub struct ListTransactionsQuery {
    pub month: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "perPage")]
    pub per_page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: i64,
    pub product_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub sold: bool,
    pub date_of_sale: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(t: Transaction) -> Self {
        Self {
            id: t.id,
            product_id: t.product_id,
            title: t.title,
            description: t.description,
            price: t.price,
            category: t.category,
            image: t.image,
            sold: t.sold,
            date_of_sale: t.date_of_sale,
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    pub total_sale_amount: f64,
    pub total_sold_items: i64,
    pub total_not_sold_items: i64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct BarChartItem {
    pub range: &'static str,
    pub count: i64,
}

#[derive(Debug, Serialize, PartialEq, sqlx::FromRow)]
pub struct PieChartItem {
    #[serde(rename = "_id")]
    pub category: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedResponse {
    pub transactions: Vec<TransactionResponse>,
    pub statistics: StatisticsResponse,
    pub bar_chart: Vec<BarChartItem>,
    pub pie_chart: Vec<PieChartItem>,
}

/// One record of the remote seed dataset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedTransaction {
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    #[serde(default)]
    pub sold: bool,
    pub date_of_sale: DateTime<FixedOffset>,
}
