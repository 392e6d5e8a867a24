pub mod query;
pub mod summary;
