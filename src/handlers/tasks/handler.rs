//! Task handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use putka_common::TaskId;

use crate::{error::AppResult, services::TaskService, state::AppState};

use super::response::{TaskSampleValidityResponse, TaskSolversResponse};

/// Validity of each public sample of a task
pub async fn get_sample_validity(
    State(state): State<AppState>,
    Path(task_id): Path<TaskId>,
) -> AppResult<Json<TaskSampleValidityResponse>> {
    let response = TaskService::sample_validity(state.db(), task_id).await?;
    Ok(Json(response))
}

/// Number of distinct users with a solved upload
pub async fn get_solvers(
    State(state): State<AppState>,
    Path(task_id): Path<TaskId>,
) -> AppResult<Json<TaskSolversResponse>> {
    let response = TaskService::solvers(state.db(), task_id).await?;
    Ok(Json(response))
}
