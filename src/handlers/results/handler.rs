//! Result summary handler implementations

use axum::{Json, extract::State};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    services::ResultsService,
    state::AppState,
};

use super::{
    request::{SampleValidityRequest, SummaryRequest},
    response::{SampleValidityResponse, UploadResultsResponse},
};

/// Summarize results supplied by the caller
pub async fn summarize_results(
    State(state): State<AppState>,
    Json(payload): Json<SummaryRequest>,
) -> AppResult<Json<UploadResultsResponse>> {
    payload.validate()?;

    if let Some(stray) = payload
        .test_cases
        .iter()
        .find(|t| t.upload_id != payload.upload.id)
    {
        return Err(AppError::Validation(format!(
            "Test case {} belongs to upload {}, not {}",
            stray.id, stray.upload_id, payload.upload.id
        )));
    }

    let summary = ResultsService::summarize(
        &payload.upload,
        &payload.test_cases,
        &payload.testscript,
        payload.viewer.is_staff,
        state.masking(),
    );

    Ok(Json(summary))
}

/// Classify public samples from supplied official solution results
pub async fn classify_samples(
    Json(payload): Json<SampleValidityRequest>,
) -> AppResult<Json<SampleValidityResponse>> {
    payload.validate()?;

    Ok(Json(ResultsService::classify_samples(&payload.results)))
}
