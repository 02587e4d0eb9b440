//! Upload handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use putka_common::{RunStatus, UploadId};
use validator::Validate;

use crate::{
    constants::DEFAULT_LIST_LIMIT,
    error::{AppError, AppResult},
    handlers::results::UploadResultsResponse,
    services::{ResultsService, UploadService},
    state::AppState,
};

use super::{
    request::{ListUploadsQuery, UploadResultsQuery},
    response::UploadsListResponse,
};

/// Results of one upload as the viewer sees them
pub async fn get_upload_results(
    State(state): State<AppState>,
    Path(upload_id): Path<UploadId>,
    Query(query): Query<UploadResultsQuery>,
) -> AppResult<Json<UploadResultsResponse>> {
    let response =
        ResultsService::upload_results(state.db(), upload_id, query.staff, state.masking())
            .await?;
    Ok(Json(response))
}

/// List finished uploads by displayed aggregate status, newest first
pub async fn list_uploads(
    State(state): State<AppState>,
    Query(query): Query<ListUploadsQuery>,
) -> AppResult<Json<UploadsListResponse>> {
    query.validate()?;

    let status: RunStatus = query
        .status
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("Unknown status: {}", query.status)))?;

    let response = UploadService::list_by_masked_status(
        state.db(),
        status,
        query.task_id,
        query.staff,
        state.masking(),
        query.limit.unwrap_or(DEFAULT_LIST_LIMIT),
    )
    .await?;

    Ok(Json(response))
}
