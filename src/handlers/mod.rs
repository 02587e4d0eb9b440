//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod health;
pub mod results;
pub mod tasks;
pub mod uploads;
pub mod vocabulary;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(results::routes())
        .merge(vocabulary::routes())
        .nest("/uploads", uploads::routes())
        .nest("/tasks", tasks::routes())
}

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/", get(health::health_check))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness));

    Router::new()
        .nest("/health", health_routes)
        .nest("/api/v1", routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, DatabaseConfig, ManagerConfig, PutkaConfig, ServerConfig};

    /// Router over a lazy pool; only database-free endpoints are exercised.
    fn app() -> Router {
        let database = DatabaseConfig {
            url: "postgres://putka@localhost/putka".to_string(),
            max_connections: 1,
        };
        let pool = PgPoolOptions::new()
            .connect_lazy(&database.url)
            .expect("lazy pool");
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "putka=debug".to_string(),
            },
            database,
            putka: PutkaConfig::default(),
            manager: ManagerConfig::default(),
        };
        create_router(AppState::new(pool, config))
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn upload() -> Value {
        json!({
            "id": 7,
            "user_id": 1,
            "task_id": 2,
            "lang": "cpp",
            "filename": "sol.cpp",
            "upload_time": "2024-03-01T10:00:00Z",
            "status": "done",
            "preparation_status": "OK",
            "agg_status": "OK",
            "points": 10,
            "max_points": 10
        })
    }

    fn test_case(id: i64, upload_id: i64, name: &str, status: &str) -> Value {
        json!({
            "id": id,
            "upload_id": upload_id,
            "name": name,
            "run_status": status,
            "points": 1,
            "max_points": 1
        })
    }

    #[tokio::test]
    async fn test_liveness() {
        let response = app()
            .oneshot(Request::get("/health/live").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_summary_endpoint() {
        let (status, body) = post_json(
            "/api/v1/results/summary",
            json!({
                "upload": upload(),
                "test_cases": [test_case(1, 7, "1.in", "OK")]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["headline"], "Upload #7 (OK, 10/10)");
        assert_eq!(body["solved"], true);
        assert_eq!(body["test_cases"][0]["output_file"], "1.out");
        assert!(body.get("staff_alert").is_none());
    }

    #[tokio::test]
    async fn test_summary_rejects_foreign_test_cases() {
        let (status, body) = post_json(
            "/api/v1/results/summary",
            json!({
                "upload": upload(),
                "test_cases": [test_case(1, 8, "1.in", "OK")]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_sample_validity_endpoint() {
        let (status, body) = post_json(
            "/api/v1/samples/validity",
            json!({
                "results": [
                    test_case(1, 7, "a.pubin", "OK"),
                    test_case(2, 8, "a.pubin", "WA"),
                    test_case(3, 7, "b.pubin", "OK"),
                    test_case(4, 7, "1.in", "WA")
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["samples"]["a.pubin"]["validity"], "mixed");
        assert_eq!(body["samples"]["b.pubin"]["validity"], "ok");
        assert!(body["samples"].get("1.in").is_none());
    }
}
