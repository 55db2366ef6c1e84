use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use catalog_server::{
    cors_layer,
    health::{healthz, livez},
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    config::Config,
    handlers::{
        items::{create_item, get_item},
        tags::{create_tag, get_tag},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/tags", post(create_tag))
        .route("/tags/{tag_id}", get(get_tag))
        .route("/items", post(create_item))
        .route("/items/{item_id}", get(get_item))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::storage::SqliteRepository;

    fn memory_app() -> Router {
        create_app(AppState::default(), &Config::default())
    }

    async fn sqlite_app() -> Router {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        create_app(
            AppState::with_repository(Arc::new(repo)),
            &Config::default(),
        )
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    fn tag_name_set(item: &Value) -> BTreeSet<String> {
        item["tag_names"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_create_tag_then_duplicate_is_rejected() {
        for app in [memory_app(), sqlite_app().await] {
            let (status, body) = send(&app, "POST", "/tags", Some(json!({"name": "red"}))).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({"id": 1, "name": "red"}));

            let (status, body) = send(&app, "POST", "/tags", Some(json!({"name": "red"}))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body["detail"]
                .as_str()
                .unwrap()
                .starts_with("Tag already exists"));

            let (status, _) = send(&app, "GET", "/tags/2", None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn test_create_item_then_get_its_first_tag() {
        for app in [memory_app(), sqlite_app().await] {
            let (status, body) = send(
                &app,
                "POST",
                "/items",
                Some(json!({"name": "shirt", "tag_names": ["red", "cotton"]})),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(
                body,
                json!({"id": 1, "name": "shirt", "tag_names": ["red", "cotton"]})
            );

            let (status, body) = send(&app, "GET", "/tags/1", None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({"id": 1, "name": "red"}));
        }
    }

    #[tokio::test]
    async fn test_get_item_returns_tag_names_as_set() {
        for app in [memory_app(), sqlite_app().await] {
            let (_, created) = send(
                &app,
                "POST",
                "/items",
                Some(json!({"name": "n1", "tag_names": ["a", "b"]})),
            )
            .await;
            let id = created["id"].as_i64().unwrap();

            let (status, item) = send(&app, "GET", &format!("/items/{id}"), None).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(item["name"], "n1");
            assert_eq!(
                tag_name_set(&item),
                BTreeSet::from(["a".to_string(), "b".to_string()])
            );
        }
    }

    #[tokio::test]
    async fn test_repeated_tag_names_are_associated_once() {
        for app in [memory_app(), sqlite_app().await] {
            let (status, body) = send(
                &app,
                "POST",
                "/items",
                Some(json!({"name": "shirt", "tag_names": ["red", "red"]})),
            )
            .await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["tag_names"], json!(["red"]));

            let (status, _) = send(&app, "GET", "/tags/2", None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn test_duplicate_item_rolls_back_new_tags() {
        for app in [memory_app(), sqlite_app().await] {
            send(
                &app,
                "POST",
                "/items",
                Some(json!({"name": "shirt", "tag_names": ["red"]})),
            )
            .await;

            let (status, body) = send(
                &app,
                "POST",
                "/items",
                Some(json!({"name": "shirt", "tag_names": ["red", "linen"]})),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body["detail"]
                .as_str()
                .unwrap()
                .starts_with("Item already exists"));

            // "linen" would have been tag 2.
            let (status, _) = send(&app, "GET", "/tags/2", None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);

            // A later item can still claim the name.
            let (_, body) = send(
                &app,
                "POST",
                "/items",
                Some(json!({"name": "scarf", "tag_names": ["linen"]})),
            )
            .await;
            assert_eq!(body["id"], 2);
            let (_, tag) = send(&app, "GET", "/tags/2", None).await;
            assert_eq!(tag, json!({"id": 2, "name": "linen"}));
        }
    }

    #[tokio::test]
    async fn test_item_tag_names_default_to_empty() {
        let app = memory_app();

        let (status, body) = send(&app, "POST", "/items", Some(json!({"name": "plain"}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": 1, "name": "plain", "tag_names": []}));
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        for app in [memory_app(), sqlite_app().await] {
            let (status, body) = send(&app, "GET", "/tags/42", None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["detail"], "Tag not found: 42");

            let (status, body) = send(&app, "GET", "/items/42", None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["detail"], "Item not found: 42");
        }
    }

    #[tokio::test]
    async fn test_blank_names_are_bad_request() {
        let app = memory_app();

        let (status, _) = send(&app, "POST", "/tags", Some(json!({"name": "  "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            "POST",
            "/items",
            Some(json!({"name": "shirt", "tag_names": ["red", ""]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        // Nothing was written by the rejected item.
        let (status, _) = send(&app, "GET", "/tags/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let app = memory_app();

        let (status, _) = send(&app, "GET", "/tags/abc", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_credentials_from_any_origin() {
        let app = memory_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/items")
                    .header(header::ORIGIN, "https://app.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let headers = response.headers();

        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://app.example"
        );
    }

    #[tokio::test]
    async fn test_cors_restricted_origins() {
        let config = Config {
            cors_allowed_origins: vec!["https://allowed.example".to_string()],
            ..Config::default()
        };
        let app = create_app(AppState::default(), &config);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/livez")
                    .header(header::ORIGIN, "https://other.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        for app in [memory_app(), sqlite_app().await] {
            let (status, _) = send(&app, "GET", "/livez", None).await;
            assert_eq!(status, StatusCode::OK);

            let (status, body) = send(&app, "GET", "/healthz", None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({"status": "ok"}));
        }
    }
}
