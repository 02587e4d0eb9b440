//! Test case row model

use putka_common::{PutkaError, RunStatus, TestCaseResult};
use sqlx::FromRow;

/// Columns of `expurtka_testcase` read by this service, as stored
#[derive(Debug, Clone, FromRow)]
pub struct TestCaseRow {
    pub id: i64,
    pub upload_id: i64,
    pub name: String,
    pub run_status: Option<i32>,
    pub time: Option<f64>,
    pub memory: Option<f64>,
    pub tasks: Option<i32>,
    pub exit_code: Option<i32>,
    pub points: i32,
    pub max_points: i32,
}

impl TestCaseRow {
    /// Select list matching this row, for the table aliased as `t`.
    pub const COLUMNS: &'static str = "t.id::int8 AS id, t.upload_id::int8 AS upload_id, \
        t.name, t.run_status, t.time, t.memory, t.tasks, t.exit_code, t.points, t.max_points";
}

impl TryFrom<TestCaseRow> for TestCaseResult {
    type Error = PutkaError;

    fn try_from(row: TestCaseRow) -> Result<Self, Self::Error> {
        Ok(TestCaseResult {
            id: row.id,
            upload_id: row.upload_id,
            name: row.name,
            run_status: RunStatus::from_optional_id(row.run_status)?,
            time: row.time,
            memory: row.memory,
            tasks: row.tasks,
            exit_code: row.exit_code,
            points: row.points,
            max_points: row.max_points,
        })
    }
}
