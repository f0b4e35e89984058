pub mod seed;
pub mod transaction;
