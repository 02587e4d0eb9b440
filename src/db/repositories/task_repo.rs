//! Task repository

use putka_common::TaskId;
use sqlx::PgPool;

use crate::error::AppResult;

/// Repository for task database operations
pub struct TaskRepository;

impl TaskRepository {
    /// Testscript of a task, `None` if the task does not exist
    pub async fn find_testscript(pool: &PgPool, task_id: TaskId) -> AppResult<Option<String>> {
        let testscript = sqlx::query_scalar::<_, String>(
            r#"SELECT testscript FROM expurtka_task WHERE id = $1"#,
        )
        .bind(task_id)
        .fetch_optional(pool)
        .await?;

        Ok(testscript)
    }

    /// Check that a task exists
    pub async fn exists(pool: &PgPool, task_id: TaskId) -> AppResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM expurtka_task WHERE id = $1)"#,
        )
        .bind(task_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}
