//! Upload row model

use chrono::{DateTime, Utc};
use putka_common::{
    PutkaError, RunStatus, Upload, UploadStatus, language::Language,
};
use sqlx::FromRow;

/// Columns of `expurtka_upload` read by this service, as stored
#[derive(Debug, Clone, FromRow)]
pub struct UploadRow {
    pub id: i64,
    pub user_id: i64,
    pub task_id: i64,
    pub lang: i32,
    pub filename: String,
    pub upload_time: DateTime<Utc>,
    pub status: i32,
    pub mgr_status: Option<i32>,
    pub preparation_status: Option<i32>,
    pub agg_status: Option<i32>,
    pub points: Option<i32>,
    pub max_points: Option<i32>,
    pub is_official_solution: bool,
}

impl UploadRow {
    /// Select list matching this row, for the table aliased as `u`.
    pub const COLUMNS: &'static str = "u.id::int8 AS id, u.user_id::int8 AS user_id, \
        u.task_id::int8 AS task_id, u.lang, u.filename, u.upload_time, u.status, u.mgr_status, \
        u.preparation_status, u.agg_status, u.points, u.max_points, u.is_official_solution";
}

impl TryFrom<UploadRow> for Upload {
    type Error = PutkaError;

    fn try_from(row: UploadRow) -> Result<Self, Self::Error> {
        Ok(Upload {
            id: row.id,
            user_id: row.user_id,
            task_id: row.task_id,
            lang: Language::from_id(row.lang)?,
            filename: row.filename,
            upload_time: row.upload_time,
            status: UploadStatus::from_id(row.status)?,
            mgr_status: row.mgr_status,
            preparation_status: RunStatus::from_optional_id(row.preparation_status)?,
            agg_status: RunStatus::from_optional_id(row.agg_status)?,
            points: row.points,
            max_points: row.max_points,
            is_official_solution: row.is_official_solution,
        })
    }
}
