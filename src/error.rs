use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use opentelemetry::trace::TraceContextExt;
use serde_json::json;
use thiserror::Error;
use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// User-facing message for any failed generation call. The concrete cause is
/// logged server-side and never crosses the HTTP boundary.
pub const UPSTREAM_ERROR_MESSAGE: &str = "The Wizard could not read the scroll (API Error).";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    #[allow(dead_code)]
    Internal(String),
}

fn get_trace_id() -> Option<String> {
    let span = Span::current();
    let context = span.context();
    let span_ref = context.span();
    let span_context = span_ref.span_context();

    if span_context.is_valid() {
        Some(span_context.trace_id().to_string())
    } else {
        None
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upstream(cause) => {
                tracing::error!(error = %cause, "Generation call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UPSTREAM_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = if let Some(trace_id) = get_trace_id() {
            json!({
                "error": error_message,
                "status": status.as_u16(),
                "trace_id": trace_id,
            })
        } else {
            json!({
                "error": error_message,
                "status": status.as_u16(),
            })
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    async fn response_parts(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_validation_error_display() {
        let error = AppError::Validation("text is required".to_string());
        assert_eq!(error.to_string(), "Validation error: text is required");
    }

    #[test]
    fn test_upstream_error_display() {
        let error = AppError::Upstream("provider timeout".to_string());
        assert_eq!(error.to_string(), "Upstream error: provider timeout");
    }

    #[tokio::test]
    async fn test_validation_maps_to_400_with_message() {
        let (status, body) =
            response_parts(AppError::Validation("Please provide a Scroll of Findings.".into()))
                .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please provide a Scroll of Findings.");
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_upstream_maps_to_500_and_hides_cause() {
        let (status, body) =
            response_parts(AppError::Upstream("401 invalid api key".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], UPSTREAM_ERROR_MESSAGE);
        assert!(!body["error"].as_str().unwrap().contains("api key"));
    }

    #[tokio::test]
    async fn test_internal_maps_to_500_generic() {
        let (status, body) = response_parts(AppError::Internal("unexpected".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }

    #[test]
    fn test_app_result_ok() {
        fn returns_ok() -> AppResult<i32> {
            Ok(42)
        }
        assert_eq!(returns_ok().unwrap(), 42);
    }
}
