//! Upload service

use std::sync::Arc;

use putka_common::{RunStatus, TaskId, Upload, UploadStatus};
use putka_rules::prelude::*;
use putka_verdict::{MaskingPolicy, unmask};
use sqlx::PgPool;

use crate::{
    db::repositories::UploadRepository, error::AppResult,
    handlers::uploads::response::UploadsListResponse,
};

/// Upload service for business logic
pub struct UploadService;

impl UploadService {
    /// Finished uploads whose aggregate status displays as `status` to the viewer
    pub async fn list_by_masked_status(
        pool: &PgPool,
        status: RunStatus,
        task_id: Option<TaskId>,
        is_staff: bool,
        policy: &MaskingPolicy,
        limit: i64,
    ) -> AppResult<UploadsListResponse> {
        let matched_statuses = unmask(status, is_staff, policy);
        let filter = Self::masked_status_filter(&matched_statuses, task_id);

        let upload_ids = UploadRepository::find_ids(pool, &filter, limit).await?;

        Ok(UploadsListResponse {
            status,
            matched_statuses,
            upload_ids,
        })
    }

    fn masked_status_filter(matched: &[RunStatus], task_id: Option<TaskId>) -> AllOf<Upload> {
        let filters: Vec<BoxedFilter<Upload>> = vec![
            Arc::new(UploadStatusIs(UploadStatus::Done)),
            Arc::new(AggStatusIn(matched.to_vec())),
        ];
        let mut filter = AllOf::new(filters);
        if let Some(task_id) = task_id {
            filter.push(Arc::new(TaskIs(task_id)));
        }
        filter
    }
}
