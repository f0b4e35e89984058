// src/query/filter.rs
use chrono::Month;
use sqlx::{Postgres, QueryBuilder};

use super::month::{month_number, parse_month};
use super::price_range::PriceBucket;

/// `WHERE` clause shared by every report.
///
/// The month is always part of the filter. A missing or unrecognized month
/// selects no rows at all.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    month: Option<Month>,
    search: Option<String>,
    sold: Option<bool>,
    price_bucket: Option<PriceBucket>,
}

impl TransactionFilter {
    pub fn for_month(month: Option<&str>) -> Self {
        Self {
            month: month.and_then(parse_month),
            ..Self::default()
        }
    }

    /// Adds a free-text search over title and description (and exact price
    /// when the text is numeric). Blank text leaves the filter unchanged.
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);
        self
    }

    pub fn with_sold(mut self, sold: bool) -> Self {
        self.sold = Some(sold);
        self
    }

    pub fn with_price_bucket(mut self, bucket: PriceBucket) -> Self {
        self.price_bucket = Some(bucket);
        self
    }

    /// Appends ` WHERE ...` to `qb`.
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push(" WHERE ");
        match self.month {
            Some(month) => {
                qb.push("EXTRACT(MONTH FROM date_of_sale AT TIME ZONE 'UTC')::INT = ")
                    .push_bind(month_number(month));
            }
            None => {
                qb.push("FALSE");
            }
        }

        if let Some(search) = &self.search {
            let pattern = like_pattern(search);
            qb.push(" AND (title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR description ILIKE ")
                .push_bind(pattern);
            if let Some(price) = numeric_search(search) {
                qb.push(" OR price = ").push_bind(price);
            }
            qb.push(")");
        }

        if let Some(sold) = self.sold {
            qb.push(" AND sold = ").push_bind(sold);
        }

        if let Some(bucket) = &self.price_bucket {
            bucket.push_condition(qb);
        }
    }
}

/// Wraps `text` for a substring `ILIKE`, escaping LIKE wildcards.
fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn numeric_search(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}
