//! Vocabulary response DTOs

use putka_common::{RunStatus, UploadStatus, language::Language, personality::Personality};
use serde::Serialize;

/// Status legend as seen by one viewer
#[derive(Debug, Serialize)]
pub struct StatusesResponse {
    pub run_statuses: Vec<RunStatusEntry>,
    pub upload_statuses: Vec<UploadStatusEntry>,
    pub compile_error: LegendEntry,
    pub partial_points: LegendEntry,
}

#[derive(Debug, Serialize)]
pub struct RunStatusEntry {
    pub code: RunStatus,
    pub id: i32,
    pub label: &'static str,
    pub icon: &'static str,
    pub meaning: &'static str,
    /// Stored statuses shown under this code
    pub includes: Vec<RunStatus>,
}

#[derive(Debug, Serialize)]
pub struct UploadStatusEntry {
    pub status: UploadStatus,
    pub id: i32,
    pub label: &'static str,
    pub icon: Option<&'static str>,
    pub meaning: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub icon: &'static str,
    pub meaning: &'static str,
}

/// Languages accepted by this deployment
#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub personality: Personality,
    pub languages: Vec<LanguageEntry>,
}

#[derive(Debug, Serialize)]
pub struct LanguageEntry {
    pub language: Language,
    pub id: i32,
    pub label: &'static str,
}

impl From<Language> for LanguageEntry {
    fn from(language: Language) -> Self {
        Self {
            language,
            id: language.id(),
            label: language.label(),
        }
    }
}
