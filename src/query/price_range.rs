// src/query/price_range.rs
use sqlx::{Postgres, QueryBuilder};

/// One bar of the price histogram.
///
/// The first bucket includes its lower bound; every other bucket starts just
/// above the previous bucket's upper bound, so adjacent buckets share no
/// price and leave none out. `max: None` means unbounded above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBucket {
    pub label: &'static str,
    pub min: f64,
    pub min_inclusive: bool,
    pub max: Option<f64>,
}

const fn bucket(label: &'static str, min: f64, max: f64) -> PriceBucket {
    PriceBucket { label, min, min_inclusive: false, max: Some(max) }
}

pub const PRICE_BUCKETS: [PriceBucket; 10] = [
    PriceBucket { label: "0-100", min: 0.0, min_inclusive: true, max: Some(100.0) },
    bucket("101-200", 100.0, 200.0),
    bucket("201-300", 200.0, 300.0),
    bucket("301-400", 300.0, 400.0),
    bucket("401-500", 400.0, 500.0),
    bucket("501-600", 500.0, 600.0),
    bucket("601-700", 600.0, 700.0),
    bucket("701-800", 700.0, 800.0),
    bucket("801-900", 800.0, 900.0),
    PriceBucket { label: "901-above", min: 900.0, min_inclusive: false, max: None },
];

impl PriceBucket {
    /// Appends ` AND price ...` conditions selecting this bucket.
    pub fn push_condition(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push(if self.min_inclusive { " AND price >= " } else { " AND price > " })
            .push_bind(self.min);
        if let Some(max) = self.max {
            qb.push(" AND price <= ").push_bind(max);
        }
    }
}
