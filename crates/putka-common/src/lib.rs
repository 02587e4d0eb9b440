//! Common types, errors, and vocabulary shared by the Putka results crates.

pub mod alert;
pub mod error;
pub mod language;
pub mod personality;
pub mod status;
pub mod types;

pub use error::{PutkaError, PutkaResult};
pub use status::{RunStatus, SampleValidity, UploadStatus};
pub use types::*;
