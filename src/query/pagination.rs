// src/query/pagination.rs
use sqlx::{Postgres, QueryBuilder};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 10;

/// A 1-based page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Coerces raw `page`/`perPage` query values.
    ///
    /// Missing or non-numeric values fall back to the defaults; page 0 is
    /// treated as the first page and a page size of 0 as the default size.
    pub fn from_params(page: Option<&str>, per_page: Option<&str>) -> Self {
        let page = coerce(page).unwrap_or(DEFAULT_PAGE).max(1);
        let per_page = match coerce(per_page) {
            Some(0) | None => DEFAULT_PER_PAGE,
            Some(n) => n,
        };

        Self { page, per_page }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        self.per_page
    }

    /// Appends `LIMIT`/`OFFSET` clauses. Values beyond `i64::MAX` are clamped.
    pub fn push_limit_offset(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push(" LIMIT ")
            .push_bind(clamp_i64(self.limit()))
            .push(" OFFSET ")
            .push_bind(clamp_i64(self.offset()));
    }
}

fn coerce(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
}

fn clamp_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
