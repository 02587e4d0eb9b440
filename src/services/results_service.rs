//! Results service
//!
//! Turns persisted judge results into what one viewer gets to see.

use putka_common::{TestCaseResult, Upload, UploadId, alert::AlertKind};
use putka_verdict::{
    MaskingPolicy,
    display::{self, output_filename, run_status_icon, test_score, upload_icon},
    mask, mask_optional, maybe_split_into_subtasks, sample_validity, task_limits, test_status,
};
use sqlx::PgPool;

use crate::{
    db::repositories::{TaskRepository, TestCaseRepository, UploadRepository},
    error::{AppError, AppResult},
    handlers::results::response::{
        AlertResponse, SampleValidityResponse, SubtaskResponse, TestCaseResponse,
        UploadResultsResponse,
    },
};

/// Results service for business logic
pub struct ResultsService;

impl ResultsService {
    /// Summarize an upload and its test cases for a viewer
    pub fn summarize(
        upload: &Upload,
        test_cases: &[TestCaseResult],
        testscript: &str,
        is_staff: bool,
        policy: &MaskingPolicy,
    ) -> UploadResultsResponse {
        let show_jail_details = is_staff || policy.jailrun_details;

        let rows = test_cases
            .iter()
            .map(|test| {
                let status = mask_optional(test_status(test), is_staff, policy);
                TestCaseResponse {
                    id: test.id,
                    name: test.name.clone(),
                    status,
                    icon: status.map(run_status_icon),
                    time: test.time,
                    memory: test.memory,
                    tasks: test.tasks.filter(|_| show_jail_details),
                    exit_code: test.exit_code.filter(|_| show_jail_details),
                    score: test_score(test),
                    public_sample: test.is_public_sample(),
                    input_file: test.name.clone(),
                    output_file: output_filename(&test.name),
                }
            })
            .collect();

        let subtasks = maybe_split_into_subtasks(testscript, test_cases).map(|subtasks| {
            subtasks
                .into_iter()
                .enumerate()
                .map(|(i, subtask)| SubtaskResponse {
                    number: i + 1,
                    status: mask(subtask.status, is_staff, policy),
                    points: subtask.points,
                    max_points: subtask.max_points,
                    icon: subtask.icon,
                    test_case_ids: subtask.test_cases.iter().map(|t| t.id).collect(),
                })
                .collect()
        });

        let staff_alert = if is_staff {
            AlertKind::for_upload_status(upload.status).map(AlertResponse::from)
        } else {
            None
        };

        UploadResultsResponse {
            upload_id: upload.id,
            headline: display::headline(upload, is_staff, policy).to_string(),
            status: upload.status,
            status_label: upload.status.label(),
            icon: upload_icon(upload, is_staff, policy),
            compile_error: upload.is_compile_error(),
            agg_status: mask_optional(upload.agg_status, is_staff, policy),
            points: upload.points,
            max_points: upload.max_points,
            solved: upload.is_solved(),
            limits: task_limits(testscript),
            test_cases: rows,
            subtasks,
            staff_alert,
        }
    }

    /// Load an upload with its test cases and summarize it
    pub async fn upload_results(
        pool: &PgPool,
        upload_id: UploadId,
        is_staff: bool,
        policy: &MaskingPolicy,
    ) -> AppResult<UploadResultsResponse> {
        let upload = UploadRepository::find_by_id(pool, upload_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Upload not found".to_string()))?;

        let testscript = TaskRepository::find_testscript(pool, upload.task_id)
            .await?
            .unwrap_or_default();
        let test_cases = TestCaseRepository::list_for_upload(pool, upload.id).await?;

        tracing::debug!(
            upload_id,
            test_cases = test_cases.len(),
            is_staff,
            "Summarizing upload"
        );

        Ok(Self::summarize(
            &upload,
            &test_cases,
            &testscript,
            is_staff,
            policy,
        ))
    }

    /// Classify public samples from official solution results
    pub fn classify_samples(results: &[TestCaseResult]) -> SampleValidityResponse {
        sample_validity(results).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use putka_common::{RunStatus, UploadStatus, language::Language};

    const SUBTASKED: &str = "jail.limits.time = 1\nSUBTASKS = [40, 60]\n";

    const STRICT: MaskingPolicy = MaskingPolicy {
        jailrun_details: false,
        presentation_errors: false,
    };

    fn upload() -> Upload {
        Upload {
            id: 7,
            user_id: 1,
            task_id: 2,
            lang: Language::Py3,
            filename: "sol.py".to_string(),
            upload_time: Utc::now(),
            status: UploadStatus::Done,
            mgr_status: None,
            preparation_status: Some(RunStatus::Ok),
            agg_status: Some(RunStatus::Mle),
            points: Some(40),
            max_points: Some(100),
            is_official_solution: false,
        }
    }

    fn test(id: i64, name: &str, run_status: RunStatus, points: i32) -> TestCaseResult {
        TestCaseResult {
            id,
            upload_id: 7,
            name: name.to_string(),
            run_status: Some(run_status),
            time: Some(0.5),
            memory: Some(12.0),
            tasks: Some(1),
            exit_code: Some(0),
            points,
            max_points: 1,
        }
    }

    fn tests() -> Vec<TestCaseResult> {
        vec![
            test(1, "sample.pubin", RunStatus::Ok, 1),
            test(2, "1.01.in", RunStatus::Ok, 1),
            test(3, "2.01.in", RunStatus::Mle, 0),
        ]
    }

    #[test]
    fn test_summary_for_user_is_masked() {
        let summary = ResultsService::summarize(&upload(), &tests(), "", false, &STRICT);
        assert_eq!(summary.agg_status, Some(RunStatus::Rte));
        assert_eq!(summary.headline, "Upload #7 (RTE, 40/100)");
        assert_eq!(summary.icon, Some(display::PARTIAL_POINTS_ICON));
        assert_eq!(summary.test_cases[2].status, Some(RunStatus::Rte));
        assert_eq!(summary.test_cases[2].exit_code, None);
        assert!(summary.staff_alert.is_none());
        assert!(!summary.solved);
    }

    #[test]
    fn test_summary_for_staff_is_unmasked() {
        let summary = ResultsService::summarize(&upload(), &tests(), "", true, &STRICT);
        assert_eq!(summary.agg_status, Some(RunStatus::Mle));
        assert_eq!(summary.test_cases[2].status, Some(RunStatus::Mle));
        assert_eq!(summary.test_cases[2].exit_code, Some(0));
    }

    #[test]
    fn test_summary_rows() {
        let summary =
            ResultsService::summarize(&upload(), &tests(), "", false, &MaskingPolicy::TRANSPARENT);
        let sample = &summary.test_cases[0];
        assert!(sample.public_sample);
        assert_eq!((sample.score.points, sample.score.max_points), (0, 0));
        assert_eq!(sample.output_file, "sample.pubout");
        assert_eq!(summary.test_cases[1].icon, Some("fa-check"));
        assert_eq!(summary.limits.time, 2.0);
        assert!(summary.subtasks.is_none());
    }

    #[test]
    fn test_summary_with_subtasks() {
        let tests: Vec<_> = tests().into_iter().skip(1).collect();
        let summary = ResultsService::summarize(&upload(), &tests, SUBTASKED, false, &STRICT);
        let subtasks = summary.subtasks.unwrap();
        assert_eq!(subtasks.len(), 2);
        assert_eq!(subtasks[0].number, 1);
        assert_eq!(subtasks[0].points, 40);
        assert_eq!(subtasks[1].status, RunStatus::Rte);
        assert_eq!(subtasks[1].test_case_ids, vec![3]);
        assert_eq!(summary.limits.time, 1.0);
    }

    #[test]
    fn test_staff_alert_for_manual_upload() {
        let mut u = upload();
        u.status = UploadStatus::Manual;
        let summary = ResultsService::summarize(&u, &[], "", true, &STRICT);
        let alert = summary.staff_alert.unwrap();
        assert_eq!(alert.kind, AlertKind::ManualGrading);
        assert!(!alert.delete_on_click);
        assert_eq!(summary.icon, Some("fa-hand-paper"));
    }

    #[test]
    fn test_classify_samples() {
        let results = vec![
            test(1, "a.pubin", RunStatus::Ok, 1),
            test(2, "a.pubin", RunStatus::Wa, 0),
            test(3, "1.01.in", RunStatus::Ok, 1),
        ];
        let response = ResultsService::classify_samples(&results);
        assert_eq!(response.samples.len(), 1);
        assert_eq!(response.samples["a.pubin"].id, 3);
    }
}
