//! Alert kinds raised for staff and users.

use serde::{Deserialize, Serialize};

use crate::status::UploadStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Activity in a forum thread
    ThreadActivity,
    /// An upload needs manual grading
    ManualGrading,
    /// Uploaded source contains suspicious code
    SuspiciousUpload,
    /// An upload caused an internal error
    InternalError,
}

impl AlertKind {
    pub fn id(self) -> i32 {
        match self {
            AlertKind::ThreadActivity => 1,
            AlertKind::ManualGrading => 2,
            AlertKind::SuspiciousUpload => 3,
            AlertKind::InternalError => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AlertKind::ThreadActivity => "Forum: new message",
            AlertKind::ManualGrading => "Manual grading",
            AlertKind::SuspiciousUpload => "Suspicious upload",
            AlertKind::InternalError => "Internal error",
        }
    }

    /// Manual grading and internal error alerts stay until an upload is handled.
    pub fn delete_on_click(self) -> bool {
        !matches!(self, AlertKind::ManualGrading | AlertKind::InternalError)
    }

    /// The alert staff should get for an upload in the given stage, if any.
    pub fn for_upload_status(status: UploadStatus) -> Option<Self> {
        match status {
            UploadStatus::Manual => Some(AlertKind::ManualGrading),
            UploadStatus::Error => Some(AlertKind::InternalError),
            UploadStatus::Waiting | UploadStatus::Testing | UploadStatus::Done => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_for_upload_status() {
        assert_eq!(
            AlertKind::for_upload_status(UploadStatus::Manual),
            Some(AlertKind::ManualGrading)
        );
        assert_eq!(
            AlertKind::for_upload_status(UploadStatus::Error),
            Some(AlertKind::InternalError)
        );
        assert_eq!(AlertKind::for_upload_status(UploadStatus::Done), None);
    }

    #[test]
    fn test_delete_on_click() {
        assert!(AlertKind::ThreadActivity.delete_on_click());
        assert!(AlertKind::SuspiciousUpload.delete_on_click());
        assert!(!AlertKind::ManualGrading.delete_on_click());
        assert!(!AlertKind::InternalError.delete_on_click());
    }
}
