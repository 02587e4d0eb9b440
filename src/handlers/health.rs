//! Health check handlers

use std::time::Instant;

use axum::{Json, extract::State, http::StatusCode};
use putka_common::personality::Personality;
use putka_verdict::MaskingPolicy;
use serde::Serialize;

use crate::{db, state::AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub personality: Personality,
    pub masking: MaskingPolicy,
    pub manager: ManagerInfo,
    pub services: ServiceHealth,
}

/// Where uploads are sent for evaluation
#[derive(Debug, Serialize)]
pub struct ManagerInfo {
    pub host: String,
    pub port: u16,
    pub proto: String,
}

/// Individual service health status
#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub database: ServiceStatus,
}

/// Service status
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceStatus {
    fn healthy(latency_ms: u64) -> Self {
        Self {
            status: "healthy",
            latency_ms: Some(latency_ms),
            error: None,
        }
    }

    fn unhealthy(error: String) -> Self {
        Self {
            status: "unhealthy",
            latency_ms: None,
            error: Some(error),
        }
    }
}

/// GET /health
///
/// Returns the health status of the service and its database.
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let start = Instant::now();
    let database = match db::test_connection(state.db()).await {
        Ok(()) => ServiceStatus::healthy(start.elapsed().as_millis() as u64),
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            ServiceStatus::unhealthy(e.to_string())
        }
    };
    let healthy = database.error.is_none();

    let config = state.config();
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        personality: config.putka.personality,
        masking: config.putka.masking,
        manager: ManagerInfo {
            host: config.manager.host.clone(),
            port: config.manager.port,
            proto: config.manager.proto.clone(),
        },
        services: ServiceHealth { database },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// GET /health/live
///
/// Liveness probe, 200 while the process runs.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Readiness probe, 200 once the database answers.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match db::test_connection(state.db()).await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
