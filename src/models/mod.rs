pub mod error;
pub mod football_match;
pub mod query;
