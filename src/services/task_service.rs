//! Task service

use putka_common::TaskId;
use putka_verdict::sample_validity;
use sqlx::PgPool;

use crate::{
    db::repositories::{TaskRepository, TestCaseRepository, UploadRepository},
    error::{AppError, AppResult},
    handlers::tasks::response::{TaskSampleValidityResponse, TaskSolversResponse},
};

/// Task service for business logic
pub struct TaskService;

impl TaskService {
    /// Classify the public samples of a task. Empty without official solutions.
    pub async fn sample_validity(
        pool: &PgPool,
        task_id: TaskId,
    ) -> AppResult<TaskSampleValidityResponse> {
        Self::ensure_exists(pool, task_id).await?;

        let results = TestCaseRepository::list_official_samples(pool, task_id).await?;
        tracing::debug!(task_id, results = results.len(), "Classifying samples");

        Ok(TaskSampleValidityResponse {
            task_id,
            validity: sample_validity(&results).into(),
        })
    }

    /// Count users who solved a task
    pub async fn solvers(pool: &PgPool, task_id: TaskId) -> AppResult<TaskSolversResponse> {
        Self::ensure_exists(pool, task_id).await?;

        let solvers = UploadRepository::count_solvers(pool, task_id).await?;

        Ok(TaskSolversResponse { task_id, solvers })
    }

    async fn ensure_exists(pool: &PgPool, task_id: TaskId) -> AppResult<()> {
        if TaskRepository::exists(pool, task_id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("Task not found".to_string()))
        }
    }
}
