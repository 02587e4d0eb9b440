//! Result summary response DTOs

use std::collections::BTreeMap;

use putka_common::{
    RunStatus, SampleValidity, TestCaseId, UploadId, UploadStatus, alert::AlertKind,
};
use putka_verdict::{TaskLimits, display::Score};
use serde::Serialize;

/// Upload results as shown to one viewer
#[derive(Debug, Serialize)]
pub struct UploadResultsResponse {
    pub upload_id: UploadId,
    pub headline: String,
    pub status: UploadStatus,
    pub status_label: &'static str,
    pub icon: Option<&'static str>,
    pub compile_error: bool,
    /// Masked for the viewer
    pub agg_status: Option<RunStatus>,
    pub points: Option<i32>,
    pub max_points: Option<i32>,
    pub solved: bool,
    pub limits: TaskLimits,
    pub test_cases: Vec<TestCaseResponse>,
    /// Present only when the testscript declares subtasks matching the tests
    pub subtasks: Option<Vec<SubtaskResponse>>,
    /// Alert staff should get for the upload's stage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_alert: Option<AlertResponse>,
}

/// One test case row
#[derive(Debug, Serialize)]
pub struct TestCaseResponse {
    pub id: TestCaseId,
    pub name: String,
    /// Effective status, masked for the viewer; `None` while pending
    pub status: Option<RunStatus>,
    pub icon: Option<&'static str>,
    pub time: Option<f64>,
    pub memory: Option<f64>,
    pub tasks: Option<i32>,
    pub exit_code: Option<i32>,
    pub score: Score,
    pub public_sample: bool,
    pub input_file: String,
    pub output_file: String,
}

/// One subtask row
#[derive(Debug, Serialize)]
pub struct SubtaskResponse {
    /// 1-based, in order of declaration
    pub number: usize,
    pub status: RunStatus,
    pub points: i32,
    pub max_points: i32,
    pub icon: &'static str,
    pub test_case_ids: Vec<TestCaseId>,
}

#[derive(Debug, Serialize)]
pub struct AlertResponse {
    pub kind: AlertKind,
    pub id: i32,
    pub title: &'static str,
    pub delete_on_click: bool,
}

impl From<AlertKind> for AlertResponse {
    fn from(kind: AlertKind) -> Self {
        Self {
            kind,
            id: kind.id(),
            title: kind.title(),
            delete_on_click: kind.delete_on_click(),
        }
    }
}

/// Validity of each public sample, ordered by name
#[derive(Debug, Serialize)]
pub struct SampleValidityResponse {
    pub samples: BTreeMap<String, SampleValidityEntry>,
}

#[derive(Debug, Serialize)]
pub struct SampleValidityEntry {
    pub validity: SampleValidity,
    pub id: i32,
    pub description: &'static str,
}

impl From<SampleValidity> for SampleValidityEntry {
    fn from(validity: SampleValidity) -> Self {
        Self {
            validity,
            id: validity.id(),
            description: validity.description(),
        }
    }
}

impl From<BTreeMap<String, SampleValidity>> for SampleValidityResponse {
    fn from(samples: BTreeMap<String, SampleValidity>) -> Self {
        Self {
            samples: samples
                .into_iter()
                .map(|(name, validity)| (name, validity.into()))
                .collect(),
        }
    }
}
