//! Task handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Task routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{id}/sample-validity", get(handler::get_sample_validity))
        .route("/{id}/solvers", get(handler::get_solvers))
}
