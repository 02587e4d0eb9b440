//! Putka - results core of the Putka programming contest judge
//!
//! This library decides what a viewer sees of an upload's evaluation:
//! masked statuses, per-test rows, subtask scores, the solved flag and the
//! validity of public sample cases.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic over the `putka-verdict` and `putka-rules` crates
//! - **Repositories**: Read-only access to the judge database
//! - **Models**: Database rows and their conversion to domain records

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
