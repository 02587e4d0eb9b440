//! Vocabulary handler implementations

use axum::{
    Json,
    extract::{Query, State},
};
use putka_common::{RunStatus, UploadStatus};
use putka_verdict::{
    MaskingPolicy,
    display::{
        COMPILE_ERROR_ICON, COMPILE_ERROR_MEANING, COMPILE_ERROR_TEXT, PARTIAL_POINTS_ICON,
        PARTIAL_POINTS_MEANING, run_status_icon, run_status_meaning, upload_status_icon,
        upload_status_meaning,
    },
    mask, unmask,
};

use crate::state::AppState;

use super::{
    request::StatusesQuery,
    response::{
        LanguagesResponse, LegendEntry, RunStatusEntry, StatusesResponse, UploadStatusEntry,
    },
};

/// Status legend, listing only codes the viewer can actually get
pub async fn list_statuses(
    State(state): State<AppState>,
    Query(query): Query<StatusesQuery>,
) -> Json<StatusesResponse> {
    Json(status_legend(query.staff, state.masking()))
}

/// Languages accepted by the configured personality
pub async fn list_languages(State(state): State<AppState>) -> Json<LanguagesResponse> {
    let personality = state.config().putka.personality;

    Json(LanguagesResponse {
        personality,
        languages: personality
            .supported_languages()
            .into_iter()
            .map(Into::into)
            .collect(),
    })
}

fn status_legend(is_staff: bool, policy: &MaskingPolicy) -> StatusesResponse {
    let run_statuses = RunStatus::ALL
        .into_iter()
        .filter(|&status| mask(status, is_staff, policy) == status)
        .map(|status| RunStatusEntry {
            code: status,
            id: status.id(),
            label: status.label(),
            icon: run_status_icon(status),
            meaning: run_status_meaning(status),
            includes: unmask(status, is_staff, policy),
        })
        .collect();

    let upload_statuses = UploadStatus::ALL
        .into_iter()
        .map(|status| UploadStatusEntry {
            status,
            id: status.id(),
            label: status.label(),
            icon: upload_status_icon(status),
            meaning: upload_status_meaning(status),
        })
        .collect();

    StatusesResponse {
        run_statuses,
        upload_statuses,
        compile_error: LegendEntry {
            label: COMPILE_ERROR_TEXT,
            icon: COMPILE_ERROR_ICON,
            meaning: COMPILE_ERROR_MEANING,
        },
        partial_points: LegendEntry {
            label: "Partial points",
            icon: PARTIAL_POINTS_ICON,
            meaning: PARTIAL_POINTS_MEANING,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACM: MaskingPolicy = MaskingPolicy {
        jailrun_details: false,
        presentation_errors: false,
    };

    fn codes(legend: &StatusesResponse) -> Vec<RunStatus> {
        legend.run_statuses.iter().map(|e| e.code).collect()
    }

    #[test]
    fn test_legend_hides_masked_statuses() {
        let legend = status_legend(false, &ACM);
        assert_eq!(
            codes(&legend),
            vec![RunStatus::Ok, RunStatus::Rte, RunStatus::Tle, RunStatus::Wa]
        );
        let rte = &legend.run_statuses[1];
        assert_eq!(rte.includes.len(), 6);
        assert!(rte.includes.contains(&RunStatus::Mle));
    }

    #[test]
    fn test_staff_legend_is_complete() {
        let legend = status_legend(true, &ACM);
        assert_eq!(codes(&legend), RunStatus::ALL.to_vec());
        assert!(legend.run_statuses.iter().all(|e| e.includes == vec![e.code]));
        assert_eq!(legend.upload_statuses.len(), 5);
    }
}
