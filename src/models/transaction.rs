use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Transaction {
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
