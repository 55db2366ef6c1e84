//! Health check endpoints.
//!
//! - `/livez` - Liveness (immediate 200, no checks)
//! - `/healthz` - Storage round trip
//!
//! `healthz` extracts `Arc<dyn StorageHealth>`, so a server's state must
//! implement `FromRef` for it.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use catalog_core::storage::StorageHealth;

/// GET /livez - Always 200.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Returns 200 when the storage backend answers, 503 otherwise.
pub async fn healthz(State(health): State<Arc<dyn StorageHealth>>) -> Response {
    match health.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Storage health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable", "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{body::Body, http::Request, routing::get, Router};
    use catalog_core::storage::{RepositoryError, Result};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    struct Up;

    #[async_trait]
    impl StorageHealth for Up {
        async fn ping(&self) -> Result<()> {
            Ok(())
        }
    }

    struct Down;

    #[async_trait]
    impl StorageHealth for Down {
        async fn ping(&self) -> Result<()> {
            Err(RepositoryError::ConnectionFailed("closed".to_string()))
        }
    }

    async fn get_healthz(health: Arc<dyn StorageHealth>) -> (StatusCode, Value) {
        let app = Router::new()
            .route("/healthz", get(healthz))
            .with_state(health);
        let response = app
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_healthz_ok() {
        let (status, body) = get_healthz(Arc::new(Up)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_healthz_reports_unavailable_storage() {
        let (status, body) = get_healthz(Arc::new(Down)).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unavailable");
        assert_eq!(body["error"], "Connection failed: closed");
    }
}
