//! Upload repository

use putka_common::{TaskId, Upload, UploadId};
use putka_rules::prelude::*;
use sqlx::PgPool;

use crate::{error::AppResult, models::UploadRow};

/// Repository for upload database operations
pub struct UploadRepository;

impl UploadRepository {
    /// Find upload by ID
    pub async fn find_by_id(pool: &PgPool, id: UploadId) -> AppResult<Option<Upload>> {
        let sql = format!(
            "SELECT {} FROM expurtka_upload u WHERE u.id = $1",
            UploadRow::COLUMNS
        );
        let row = sqlx::query_as::<_, UploadRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Upload::try_from).transpose()?)
    }

    /// Ids of uploads matching `filter`, newest first
    pub async fn find_ids<F>(pool: &PgPool, filter: &F, limit: i64) -> AppResult<Vec<UploadId>>
    where
        F: SqlFilter + ?Sized,
    {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT u.id::int8 FROM expurtka_upload u WHERE ");
        filter.push_sql(&mut qb, "u.");
        qb.push(" ORDER BY u.upload_time DESC, u.id DESC LIMIT ")
            .push_bind(limit);

        tracing::debug!(sql = qb.sql(), "Listing uploads");
        let ids = qb.build_query_scalar::<i64>().fetch_all(pool).await?;

        Ok(ids)
    }

    /// Number of distinct users with a solved upload of the task
    pub async fn count_solvers(pool: &PgPool, task_id: TaskId) -> AppResult<i64> {
        let rule = Spec(TaskIs(task_id)) & solved();

        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT COUNT(DISTINCT u.user_id) FROM expurtka_upload u WHERE ",
        );
        rule.push_sql(&mut qb, "u.");
        let count = qb.build_query_scalar::<i64>().fetch_one(pool).await?;

        Ok(count)
    }
}
