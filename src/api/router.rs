//! Meeting API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the meeting API router.
pub fn meeting_api_router(ctx: ApiContext) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/meetings/summarize", post(endpoints::meetings::summarize))
        .route("/meetings/export", post(endpoints::meetings::export))
        .with_state(ctx);

    Router::new().nest("/api", routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::MAX_TEXT_LENGTH;
    use crate::pipeline::summarize::{SummarizeError, Summarizer};

    struct StubSummarizer;

    impl Summarizer for StubSummarizer {
        fn summarize(&self, _text: &str) -> Result<String, SummarizeError> {
            Ok("stub summary".to_string())
        }
    }

    struct DownSummarizer;

    impl Summarizer for DownSummarizer {
        fn summarize(&self, _text: &str) -> Result<String, SummarizeError> {
            Err(SummarizeError::Connection("http://localhost:11434".into()))
        }
    }

    fn test_router() -> Router {
        meeting_api_router(ApiContext::new(Arc::new(StubSummarizer)))
    }

    fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = test_router();
        let req = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn summarize_returns_notes() {
        let app = test_router();
        let req = json_request(
            "/api/meetings/summarize",
            serde_json::json!({
                "text": "Please review the budget by next Friday.",
                "reference_date": "2024-06-10"
            }),
        );
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["summary"], "stub summary");
        assert_eq!(json["actions"][0], "Please review the budget by next Friday.");
        assert_eq!(json["dates"][0]["date"], "2024-06-21");
    }

    #[tokio::test]
    async fn summarize_rejects_bad_reference_date() {
        let app = test_router();
        let req = json_request(
            "/api/meetings/summarize",
            serde_json::json!({ "text": "Hello.", "reference_date": "June 10th" }),
        );
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn summarize_rejects_oversized_text() {
        let app = test_router();
        let req = json_request(
            "/api/meetings/summarize",
            serde_json::json!({ "text": "a".repeat(MAX_TEXT_LENGTH + 1) }),
        );
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn summarize_maps_backend_outage_to_503() {
        let app = meeting_api_router(ApiContext::new(Arc::new(DownSummarizer)));
        let req = json_request(
            "/api/meetings/summarize",
            serde_json::json!({ "text": "Some content to summarize." }),
        );
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn export_returns_pdf_attachment() {
        let app = test_router();
        let req = json_request(
            "/api/meetings/export",
            serde_json::json!({
                "summary": "The team agreed on the Q3 roadmap.",
                "actions": ["Please review the budget."],
                "dates": [{ "date": "2024-06-21", "context": "Review by next Friday" }]
            }),
        );
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = test_router();
        let req = Request::builder()
            .uri("/api/meetings")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
