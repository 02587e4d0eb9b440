//! Task response DTOs

use putka_common::TaskId;
use serde::Serialize;

use crate::handlers::results::SampleValidityResponse;

/// Sample validity of a task, from its official solutions
#[derive(Debug, Serialize)]
pub struct TaskSampleValidityResponse {
    pub task_id: TaskId,
    #[serde(flatten)]
    pub validity: SampleValidityResponse,
}

/// Number of users who solved a task
#[derive(Debug, Serialize)]
pub struct TaskSolversResponse {
    pub task_id: TaskId,
    pub solvers: i64,
}
