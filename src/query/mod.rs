//! Translation of request parameters into SQL filters and paging clauses.

pub mod filter;
pub mod month;
pub mod pagination;
pub mod price_range;

pub use filter::TransactionFilter;
pub use pagination::Pagination;
pub use price_range::PRICE_BUCKETS;
