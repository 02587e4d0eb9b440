//! Effective status of a single test case.

use putka_common::{RunStatus, TestCaseResult};

/// The status a test case counts as.
///
/// A run the jail reported as OK but that got fewer than the available points
/// counts as a wrong answer. Pending runs stay pending.
pub fn effective_status(
    run_status: Option<RunStatus>,
    points: i32,
    max_points: i32,
) -> Option<RunStatus> {
    match run_status {
        Some(RunStatus::Ok) if points != max_points => Some(RunStatus::Wa),
        other => other,
    }
}

/// [`effective_status`] of a persisted test case result.
pub fn test_status(test: &TestCaseResult) -> Option<RunStatus> {
    effective_status(test.run_status, test.points, test.max_points)
}
