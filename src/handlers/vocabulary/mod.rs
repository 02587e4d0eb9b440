//! Vocabulary handlers: status legend and accepted languages

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Vocabulary routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/statuses", get(handler::list_statuses))
        .route("/languages", get(handler::list_languages))
}
