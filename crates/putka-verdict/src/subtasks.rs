//! Grouping of test case results into subtasks.
//!
//! Subtasks are not persisted. They are reconstructed from the testscript's
//! point list and the test case names, which by convention look like
//! `<subtask>.<case>.in`. This only works for ACM-style aggregation inside each
//! subtask, where a subtask scores all of its points or none.

use putka_common::{RunStatus, TestCaseResult};
use serde::Serialize;

use crate::testscript::subtask_info;
use crate::verdict::test_status;

/// Icon of a subtask that got all of its points.
pub const SUBTASK_PASSED_ICON: &str = "fa-check";

/// Icon of a subtask that lost points.
pub const SUBTASK_FAILED_ICON: &str = "fa-times";

/// Aggregated result of one subtask.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubtaskDetails<'a> {
    pub max_points: i32,
    pub status: RunStatus,
    pub points: i32,
    pub icon: &'static str,
    pub test_cases: Vec<&'a TestCaseResult>,
}

impl<'a> SubtaskDetails<'a> {
    pub fn new(max_points: i32, status: RunStatus, test_cases: Vec<&'a TestCaseResult>) -> Self {
        let points = if status == RunStatus::Ok { max_points } else { 0 };
        let icon = if points == max_points {
            SUBTASK_PASSED_ICON
        } else {
            SUBTASK_FAILED_ICON
        };
        SubtaskDetails {
            max_points,
            status,
            points,
            icon,
            test_cases,
        }
    }
}

/// The subtask a test case belongs to, taken from its name.
fn subtask_key(name: &str) -> Option<&str> {
    let segments: Vec<&str> = name.split('.').collect();
    let key = *segments.len().checked_sub(3).and_then(|i| segments.get(i))?;
    if key.is_empty() { None } else { Some(key) }
}

/// Status of a subtask: the first test that did not pass decides it.
/// A test that is still pending fails the subtask.
fn aggregate_status(tests: &[&TestCaseResult]) -> RunStatus {
    for test in tests {
        match test_status(test) {
            Some(RunStatus::Ok) => continue,
            Some(status) => return status,
            None => return RunStatus::Wa,
        }
    }
    RunStatus::Ok
}

/// Split `test_cases` into the subtasks the testscript declares.
///
/// Returns `None` when the testscript declares no subtasks, when some test
/// case name does not carry a subtask, or when the number of subtasks found
/// does not match the declaration. Subtasks are matched to the declared
/// points in order of first appearance.
pub fn maybe_split_into_subtasks<'a>(
    testscript: &str,
    test_cases: &'a [TestCaseResult],
) -> Option<Vec<SubtaskDetails<'a>>> {
    let points = subtask_info(testscript)?;

    let mut groups: Vec<(&str, Vec<&'a TestCaseResult>)> = Vec::new();
    for test in test_cases {
        let Some(key) = subtask_key(&test.name) else {
            tracing::debug!(name = %test.name, "Test case name has no subtask, not splitting");
            return None;
        };
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, tests)) => tests.push(test),
            None => groups.push((key, vec![test])),
        }
    }

    if groups.len() != points.len() {
        tracing::debug!(
            found = groups.len(),
            declared = points.len(),
            "Subtask count mismatch, not splitting"
        );
        return None;
    }

    Some(
        points
            .into_iter()
            .zip(groups)
            .map(|(max_points, (_, tests))| {
                SubtaskDetails::new(max_points, aggregate_status(&tests), tests)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_case(name: &str, run_status: Option<RunStatus>, points: i32, max_points: i32) -> TestCaseResult {
        TestCaseResult {
            id: 0,
            upload_id: 1,
            name: name.to_string(),
            run_status,
            time: None,
            memory: None,
            tasks: None,
            exit_code: None,
            points,
            max_points,
        }
    }

    fn ok(name: &str) -> TestCaseResult {
        test_case(name, Some(RunStatus::Ok), 1, 1)
    }

    #[test]
    fn test_subtask_key() {
        assert_eq!(subtask_key("2.05.in"), Some("2"));
        assert_eq!(subtask_key("a.b.c.in"), Some("b"));
        assert_eq!(subtask_key("05.in"), None);
        assert_eq!(subtask_key(".05.in"), None);
        assert_eq!(subtask_key("sample"), None);
    }

    #[test]
    fn test_split_into_subtasks() {
        let tests = vec![
            ok("1.01.in"),
            ok("1.02.in"),
            test_case("2.01.in", Some(RunStatus::Tle), 0, 1),
            test_case("2.02.in", Some(RunStatus::Rte), 0, 1),
            ok("3.01.in"),
        ];
        let subtasks = maybe_split_into_subtasks("SUBTASKS = [20, 30, 50]", &tests).unwrap();
        assert_eq!(subtasks.len(), 3);

        assert_eq!(subtasks[0].status, RunStatus::Ok);
        assert_eq!(subtasks[0].points, 20);
        assert_eq!(subtasks[0].icon, "fa-check");
        assert_eq!(subtasks[0].test_cases.len(), 2);

        assert_eq!(subtasks[1].status, RunStatus::Tle);
        assert_eq!(subtasks[1].points, 0);
        assert_eq!(subtasks[1].max_points, 30);
        assert_eq!(subtasks[1].icon, "fa-times");

        assert_eq!(subtasks[2].points, 50);
    }

    #[test]
    fn test_subtasks_follow_first_appearance() {
        let tests = vec![ok("b.01.in"), test_case("a.01.in", Some(RunStatus::Wa), 0, 1), ok("b.02.in")];
        let subtasks = maybe_split_into_subtasks("SUBTASKS = [40, 60]", &tests).unwrap();
        assert_eq!(subtasks[0].max_points, 40);
        assert_eq!(subtasks[0].status, RunStatus::Ok);
        assert_eq!(subtasks[0].test_cases.len(), 2);
        assert_eq!(subtasks[1].max_points, 60);
        assert_eq!(subtasks[1].status, RunStatus::Wa);
    }

    #[test]
    fn test_pending_test_fails_subtask() {
        let tests = vec![ok("1.01.in"), test_case("1.02.in", None, 0, 1)];
        let subtasks = maybe_split_into_subtasks("SUBTASKS = [10]", &tests).unwrap();
        assert_eq!(subtasks[0].status, RunStatus::Wa);
        assert_eq!(subtasks[0].points, 0);
    }

    #[test]
    fn test_partial_points_fail_subtask() {
        let tests = vec![test_case("1.01.in", Some(RunStatus::Ok), 1, 2)];
        let subtasks = maybe_split_into_subtasks("SUBTASKS = [10]", &tests).unwrap();
        assert_eq!(subtasks[0].status, RunStatus::Wa);
    }

    #[test]
    fn test_zero_point_subtask_is_checked() {
        let tests = vec![test_case("1.01.in", Some(RunStatus::Wa), 0, 1)];
        let subtasks = maybe_split_into_subtasks("SUBTASKS = [0]", &tests).unwrap();
        assert_eq!(subtasks[0].points, 0);
        assert_eq!(subtasks[0].icon, "fa-check");
    }

    #[test]
    fn test_abandoned_splits() {
        let tests = vec![ok("1.01.in"), ok("2.01.in")];
        assert!(maybe_split_into_subtasks("", &tests).is_none());
        assert!(maybe_split_into_subtasks("SUBTASKS = [100]", &tests).is_none());

        let tests = vec![ok("1.01.in"), ok("sample.pubin")];
        assert!(maybe_split_into_subtasks("SUBTASKS = [50, 50]", &tests).is_none());
    }

    #[test]
    fn test_no_tests_with_declared_subtasks() {
        assert!(maybe_split_into_subtasks("SUBTASKS = [100]", &[]).is_none());
    }
}
