//! Heuristic parsing of task testscripts.
//!
//! The testscript is a program run by the tester. The web side never executes
//! it; it only scans it for a few well-known assignments.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::arithmetic::eval_arithmetic;

static SUBTASKS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:SUBTASKS\s*=|putka\.agg\.subtasked\()\s*\[\s*((?:\d+\s*,?\s*)+)]")
        .expect("Invalid subtasks regex")
});

static TIME_LIMIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"jail\.limits\.time\s*=\s*(.+)").expect("Invalid time limit regex")
});

static MEMORY_LIMIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"jail\.limits\.memory\s*=\s*(.+)").expect("Invalid memory limit regex")
});

/// Time limit assumed when the testscript does not set one, in seconds.
pub const DEFAULT_TIME_LIMIT: f64 = 2.0;

/// Memory limit assumed when the testscript does not set one, in megabytes.
pub const DEFAULT_MEMORY_LIMIT: f64 = 32.0;

/// Jail limits of a task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskLimits {
    /// CPU time in seconds
    pub time: f64,
    /// Memory in megabytes
    pub memory: f64,
}

impl Default for TaskLimits {
    fn default() -> Self {
        TaskLimits {
            time: DEFAULT_TIME_LIMIT,
            memory: DEFAULT_MEMORY_LIMIT,
        }
    }
}

/// Points per subtask, if the testscript declares subtasks.
///
/// Recognizes both `SUBTASKS = [...]` and `putka.agg.subtasked([...], ...)`.
pub fn subtask_info(testscript: &str) -> Option<Vec<i32>> {
    let captures = SUBTASKS_REGEX.captures(testscript)?;
    let list = captures.get(1)?.as_str();
    let points = list
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::parse::<i32>)
        .collect::<Result<Vec<_>, _>>()
        .ok()?;
    if points.is_empty() { None } else { Some(points) }
}

/// Jail limits set by the testscript, falling back to the defaults.
pub fn task_limits(testscript: &str) -> TaskLimits {
    let defaults = TaskLimits::default();
    TaskLimits {
        time: limit(&TIME_LIMIT_REGEX, testscript).unwrap_or(defaults.time),
        memory: limit(&MEMORY_LIMIT_REGEX, testscript).unwrap_or(defaults.memory),
    }
}

/// A zero limit counts as unset.
fn limit(regex: &Regex, testscript: &str) -> Option<f64> {
    let expr = regex.captures(testscript)?.get(1)?.as_str();
    match eval_arithmetic(expr) {
        Ok(value) if !value.is_zero() && value.as_f64().is_finite() => Some(value.as_f64()),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(expr, error = %e, "Ignoring unparsable limit");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_TESTSCRIPT: &str = "jail.limits.time = 4  # seconds\n\
        jail.limits.memory = 256  # MB\n\
        expurtka.putka.aggregator = expurtka.putka.agg.acm\n\
        \n\
        expurtka.putka.testAllOutputs(expurtka.putka.diffPEGrader)\n";

    #[test]
    fn test_subtasks_assignment() {
        assert_eq!(subtask_info("SUBTASKS = [10, 20, 70]"), Some(vec![10, 20, 70]));
        assert_eq!(subtask_info("SUBTASKS=[5,]\n"), Some(vec![5]));
    }

    #[test]
    fn test_subtasked_aggregator() {
        let script = "putka.aggregator = putka.agg.subtasked([ 30 , 70 ], putka.agg.acm)";
        assert_eq!(subtask_info(script), Some(vec![30, 70]));
    }

    #[test]
    fn test_first_declaration_wins() {
        assert_eq!(
            subtask_info("SUBTASKS = [1, 2]\nSUBTASKS = [3]"),
            Some(vec![1, 2])
        );
    }

    #[test]
    fn test_no_subtasks() {
        assert_eq!(subtask_info(DEFAULT_TESTSCRIPT), None);
        assert_eq!(subtask_info("SUBTASKS = []"), None);
        assert_eq!(subtask_info("SUBTASKS = [a, b]"), None);
        assert_eq!(subtask_info(""), None);
    }

    #[test]
    fn test_oversized_points_are_rejected() {
        assert_eq!(subtask_info("SUBTASKS = [99999999999]"), None);
    }

    #[test]
    fn test_limits_from_testscript() {
        assert_eq!(
            task_limits(DEFAULT_TESTSCRIPT),
            TaskLimits {
                time: 4.0,
                memory: 256.0
            }
        );
    }

    #[test]
    fn test_limits_default() {
        assert_eq!(task_limits(""), TaskLimits::default());
        assert_eq!(task_limits("jail.limits.time = 0"), TaskLimits::default());
        assert_eq!(task_limits("jail.limits.memory = lots"), TaskLimits::default());
    }

    #[test]
    fn test_limit_expressions() {
        let limits = task_limits("jail.limits.time = 3 / 2\njail.limits.memory = 2 ** 9 # big");
        assert_eq!(limits.time, 1.5);
        assert_eq!(limits.memory, 512.0);
    }
}
