//! Upload response DTOs

use putka_common::{RunStatus, UploadId};
use serde::Serialize;

/// Uploads whose masked aggregate status is `status`
#[derive(Debug, Serialize)]
pub struct UploadsListResponse {
    pub status: RunStatus,
    /// Stored statuses that display as `status`
    pub matched_statuses: Vec<RunStatus>,
    pub upload_ids: Vec<UploadId>,
}
