//! Axum router configuration with middleware.
//!
//! Chat routes live under `/api/`; `/ping` and `/health` sit at the root.
//! Middleware: CORS, tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/send", post(handlers::chat::send_message))
        .route(
            "/pull",
            get(handlers::chat::pull_messages).post(handlers::chat::pull_messages),
        );

    Router::new()
        .nest("/api", api_routes)
        .route("/ping", get(handlers::health::ping))
        .route("/health", get(handlers::health::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use pairchat_infra::backend::RoomLogBackend;
    use pairchat_infra::memory::InMemoryRoomLog;
    use pairchat_types::config::GlobalConfig;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        let state = AppState::from_backend(
            RoomLogBackend::Memory(InMemoryRoomLog::new()),
            GlobalConfig::default(),
            PathBuf::from("."),
        );
        build_router(state)
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn call(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn send(app: &Router, chat: &str, sender: &str, text: &str) -> (StatusCode, Value) {
        call(
            app,
            json_request(
                Method::POST,
                "/api/send",
                json!({"chat": chat, "sender": sender, "text": text}),
            ),
        )
        .await
    }

    #[tokio::test]
    async fn test_ping() {
        let resp = app()
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"pong");
    }

    #[tokio::test]
    async fn test_health_reports_backend() {
        let app = app();
        let (status, body) = call(&app, Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["backend"], "memory");
    }

    #[tokio::test]
    async fn test_send_then_pull_with_get_body() {
        let app = app();
        for (sender, text) in [("alice", "one"), ("bob", "two"), ("alice", "three")] {
            let (status, body) = send(&app, "alice:bob", sender, text).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({}));
        }

        let (status, body) = call(
            &app,
            json_request(Method::GET, "/api/pull", json!({"chat": "bob:alice", "limit": 2})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["messages"].as_array().unwrap().len(), 2);
        assert_eq!(body["messages"][0]["chat"], "bob:alice");
        assert!(body["messages"][0]["sentAt"].is_i64());
        assert_eq!(body["hasMore"], true);
        assert_eq!(body["nextCursor"], 2);

        let (status, body) = call(
            &app,
            json_request(
                Method::POST,
                "/api/pull",
                json!({"chat": "alice:bob", "cursor": 2, "limit": 2}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["hasMore"], false);
        assert_eq!(body["nextCursor"], 0);
    }

    #[tokio::test]
    async fn test_pull_empty_room() {
        let app = app();
        let (status, body) = call(
            &app,
            json_request(Method::GET, "/api/pull", json!({"chat": "alice:bob"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"messages": [], "hasMore": false, "nextCursor": 0})
        );
    }

    #[tokio::test]
    async fn test_send_from_outsider_is_forbidden() {
        let app = app();
        let (status, body) = send(&app, "alice:bob", "carol", "hi").await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["errors"][0]["code"], "SENDER_NOT_IN_CHAT");
    }

    #[tokio::test]
    async fn test_malformed_handle_is_bad_request() {
        let app = app();
        let (status, body) = send(&app, "alice-bob", "alice", "hi").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["code"], "INVALID_CHAT_HANDLE");

        let (status, body) = call(
            &app,
            json_request(Method::GET, "/api/pull", json!({"chat": "a:b:c"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["code"], "INVALID_CHAT_HANDLE");
    }

    #[tokio::test]
    async fn test_send_requires_json_body() {
        let app = app();
        let req = Request::post("/api/send")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert!(resp.status().is_client_error());
    }
}
