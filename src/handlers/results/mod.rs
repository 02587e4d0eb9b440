//! Result summary handlers
//!
//! These endpoints compute over results supplied in the request body and do
//! not touch the database.

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Result summary routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/results/summary", post(handler::summarize_results))
        .route("/samples/validity", post(handler::classify_samples))
}
