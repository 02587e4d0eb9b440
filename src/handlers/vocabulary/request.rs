//! Vocabulary request DTOs

use serde::Deserialize;

/// Status legend query
#[derive(Debug, Default, Deserialize)]
pub struct StatusesQuery {
    #[serde(default)]
    pub staff: bool,
}
