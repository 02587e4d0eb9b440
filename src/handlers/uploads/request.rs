//! Upload request DTOs

use putka_common::TaskId;
use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_LIST_LIMIT;

/// Query for one upload's results
#[derive(Debug, Default, Deserialize)]
pub struct UploadResultsQuery {
    #[serde(default)]
    pub staff: bool,
}

/// List uploads by the aggregate status the viewer would see
#[derive(Debug, Deserialize, Validate)]
pub struct ListUploadsQuery {
    /// Status code as displayed, e.g. `RTE`
    pub status: String,

    pub task_id: Option<TaskId>,

    #[serde(default)]
    pub staff: bool,

    #[validate(range(min = 1, max = MAX_LIST_LIMIT))]
    pub limit: Option<i64>,
}
