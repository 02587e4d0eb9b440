//! Database row models
//!
//! Rows hold the raw persisted ids and decode into the shared domain types.

pub mod test_case;
pub mod upload;

pub use test_case::*;
pub use upload::*;
