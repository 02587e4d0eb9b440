//! Upload and test case records as persisted by the web application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::status::{RunStatus, UploadStatus};

/// Upload ID type
pub type UploadId = i64;

/// Test case ID type
pub type TestCaseId = i64;

/// Task ID type
pub type TaskId = i64;

/// User ID type
pub type UserId = i64;

/// Input file suffix of public sample cases.
pub const PUBLIC_INPUT_SUFFIX: &str = ".pubin";

/// One submitted solution attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upload {
    pub id: UploadId,
    pub user_id: UserId,
    pub task_id: TaskId,
    pub lang: Language,
    pub filename: String,
    pub upload_time: DateTime<Utc>,
    /// Processing stage
    pub status: UploadStatus,
    /// Manager-only queue state; never interpreted here
    #[serde(default)]
    pub mgr_status: Option<i32>,
    /// Result of the compile job
    #[serde(default)]
    pub preparation_status: Option<RunStatus>,
    /// Aggregate status of all test cases
    #[serde(default)]
    pub agg_status: Option<RunStatus>,
    #[serde(default)]
    pub points: Option<i32>,
    #[serde(default)]
    pub max_points: Option<i32>,
    #[serde(default)]
    pub is_official_solution: bool,
}

impl Upload {
    /// An upload is solved when it was evaluated, compiled, passed every test
    /// and got all the points.
    ///
    /// Missing points never count as full points, which keeps this in line with
    /// the SQL rendering of the same rule where `NULL = NULL` is not true.
    pub fn is_solved(&self) -> bool {
        self.status == UploadStatus::Done
            && self.preparation_status == Some(RunStatus::Ok)
            && self.agg_status == Some(RunStatus::Ok)
            && matches!((self.points, self.max_points), (Some(p), Some(m)) if p == m)
    }

    /// True when the compile job ran and failed.
    pub fn is_compile_error(&self) -> bool {
        self.preparation_status.is_some_and(|s| s != RunStatus::Ok)
    }
}

/// Result of running an upload against one test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCaseResult {
    pub id: TestCaseId,
    pub upload_id: UploadId,
    /// Input filename by convention, e.g. `2.05.in` or `sample.pubin`
    pub name: String,
    /// Raw status reported by the jail; `None` until evaluated
    #[serde(default)]
    pub run_status: Option<RunStatus>,
    /// CPU time in seconds
    #[serde(default)]
    pub time: Option<f64>,
    /// Peak memory in megabytes
    #[serde(default)]
    pub memory: Option<f64>,
    /// Number of threads/processes used
    #[serde(default)]
    pub tasks: Option<i32>,
    #[serde(default)]
    pub exit_code: Option<i32>,
    pub points: i32,
    pub max_points: i32,
}

impl TestCaseResult {
    /// Public sample cases are shown to users but do not count towards the score.
    pub fn is_public_sample(&self) -> bool {
        self.name.ends_with(PUBLIC_INPUT_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved_upload() -> Upload {
        Upload {
            id: 1,
            user_id: 7,
            task_id: 3,
            lang: Language::Cpp,
            filename: "sol.cpp".to_string(),
            upload_time: Utc::now(),
            status: UploadStatus::Done,
            mgr_status: None,
            preparation_status: Some(RunStatus::Ok),
            agg_status: Some(RunStatus::Ok),
            points: Some(10),
            max_points: Some(10),
            is_official_solution: false,
        }
    }

    #[test]
    fn test_solved() {
        assert!(solved_upload().is_solved());
    }

    #[test]
    fn test_any_single_field_breaks_solved() {
        let mut u = solved_upload();
        u.status = UploadStatus::Testing;
        assert!(!u.is_solved());

        let mut u = solved_upload();
        u.preparation_status = Some(RunStatus::Rte);
        assert!(!u.is_solved());

        let mut u = solved_upload();
        u.agg_status = Some(RunStatus::Wa);
        assert!(!u.is_solved());

        let mut u = solved_upload();
        u.points = Some(9);
        assert!(!u.is_solved());

        let mut u = solved_upload();
        u.agg_status = None;
        assert!(!u.is_solved());
    }

    #[test]
    fn test_missing_points_are_not_solved() {
        let mut u = solved_upload();
        u.points = None;
        u.max_points = None;
        assert!(!u.is_solved());
    }

    #[test]
    fn test_compile_error() {
        let mut u = solved_upload();
        assert!(!u.is_compile_error());
        u.preparation_status = Some(RunStatus::Tle);
        assert!(u.is_compile_error());
        u.preparation_status = None;
        assert!(!u.is_compile_error());
    }

    #[test]
    fn test_upload_deserializes_with_defaults() {
        let json = r#"{
            "id": 5, "user_id": 1, "task_id": 2, "lang": "py3",
            "filename": "a.py", "upload_time": "2024-03-01T10:00:00Z",
            "status": "waiting"
        }"#;
        let upload: Upload = serde_json::from_str(json).unwrap();
        assert_eq!(upload.status, UploadStatus::Waiting);
        assert_eq!(upload.agg_status, None);
        assert!(!upload.is_official_solution);
    }
}
