use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use catalog_core::lookup::{lookup_miss_to_status_code, LookupMiss, MissPolicy};
use catalog_core::storage::{repository_error_to_status_code, RepositoryError};

/// Application error type that wraps `anyhow::Error` with its HTTP status.
///
/// Lookup misses get their status from the configured [`MissPolicy`], so they
/// go through [`AppError::miss`]. Everything else is classified on conversion:
/// repository errors use [`repository_error_to_status_code`], anything else
/// is 500.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    error: anyhow::Error,
}

impl AppError {
    /// A lookup that found no row, reported according to `policy`.
    pub fn miss(miss: LookupMiss, policy: MissPolicy) -> Self {
        let code = lookup_miss_to_status_code(&miss, policy);
        Self {
            status: StatusCode::from_u16(code).unwrap_or(StatusCode::NOT_FOUND),
            error: miss.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }
}

fn classify(error: &anyhow::Error) -> StatusCode {
    match error.downcast_ref::<RepositoryError>() {
        Some(repo_error) => StatusCode::from_u16(repository_error_to_status_code(repo_error))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status;
        let detail = self.error.to_string();

        if self.error.downcast_ref::<LookupMiss>().is_some() {
            tracing::warn!(status = %status, error = %detail, "Lookup miss");
        } else if status.is_server_error() {
            tracing::error!(status = %status, error = %detail, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %detail, "Request rejected");
        }

        // 204 responses cannot carry a body.
        if status == StatusCode::NO_CONTENT {
            return status.into_response();
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let error = err.into();
        Self {
            status: classify(&error),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deidentify_miss() -> LookupMiss {
        LookupMiss::Deidentification {
            methodid: "aes".to_string(),
            id: "7".to_string(),
        }
    }

    #[test]
    fn test_miss_status_follows_policy() {
        let err = AppError::miss(deidentify_miss(), MissPolicy::Legacy);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let err = AppError::miss(deidentify_miss(), MissPolicy::NotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_repository_errors_use_status_mapping() {
        let err = AppError::from(RepositoryError::Serialization("bad exemplar".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = AppError::from(RepositoryError::ConnectionFailed("closed".to_string()));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_no_content_has_empty_body() {
        let miss = LookupMiss::Schema {
            metaid: "m1".to_string(),
        };
        let response = AppError::miss(miss, MissPolicy::Legacy).into_response();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().get("content-type").is_none());
    }
}
