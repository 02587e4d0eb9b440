//! Test case repository

use putka_common::{PUBLIC_INPUT_SUFFIX, TaskId, TestCaseResult, UploadId};
use putka_rules::prelude::*;
use sqlx::PgPool;

use crate::{error::AppResult, models::TestCaseRow};

/// Repository for test case database operations
pub struct TestCaseRepository;

impl TestCaseRepository {
    /// Test cases of an upload, in evaluation order
    pub async fn list_for_upload(pool: &PgPool, upload_id: UploadId) -> AppResult<Vec<TestCaseResult>> {
        let sql = format!(
            "SELECT {} FROM expurtka_testcase t WHERE t.upload_id = $1 ORDER BY t.id",
            TestCaseRow::COLUMNS
        );
        let rows = sqlx::query_as::<_, TestCaseRow>(&sql)
            .bind(upload_id)
            .fetch_all(pool)
            .await?;

        decode(rows)
    }

    /// Public sample results of every official solution of a task
    pub async fn list_official_samples(pool: &PgPool, task_id: TaskId) -> AppResult<Vec<TestCaseResult>> {
        let rule = Spec(TaskIs(task_id)) & Spec(IsOfficialSolution);

        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM expurtka_testcase t \
             JOIN expurtka_upload u ON u.id = t.upload_id WHERE ",
            TestCaseRow::COLUMNS
        ));
        rule.push_sql(&mut qb, "u.");
        qb.push(" AND t.name LIKE ")
            .push_bind(format!("%{PUBLIC_INPUT_SUFFIX}"));

        let rows = qb.build_query_as::<TestCaseRow>().fetch_all(pool).await?;

        decode(rows)
    }
}

fn decode(rows: Vec<TestCaseRow>) -> AppResult<Vec<TestCaseResult>> {
    let tests = rows
        .into_iter()
        .map(TestCaseResult::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tests)
}
