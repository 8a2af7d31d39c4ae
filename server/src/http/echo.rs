use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use serde::Serialize;

const MESSAGE_FIELD: &str = "\"message\"";

#[derive(Debug, Serialize)]
struct EchoResponse {
    status: &'static str,
    received: String,
    timestamp: i64,
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct RejectionResponse {
    status: &'static str,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
}

/// Routes served by the echo target. Both paths share one handler and differ
/// only by the method the client uses.
pub fn router() -> Router {
    Router::new()
        .route("/api", any(echo))
        .route("/health", any(echo))
}

async fn echo(method: Method, body: String) -> Response {
    match method {
        Method::POST => accept_message(body),
        Method::GET => (StatusCode::OK, Json(StatusResponse { status: "ok" })).into_response(),
        _ => (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(ErrorResponse {
                error: "Method not allowed",
            }),
        )
            .into_response(),
    }
}

fn accept_message(body: String) -> Response {
    if body.trim().is_empty() || !body.contains(MESSAGE_FIELD) {
        return (
            StatusCode::BAD_REQUEST,
            Json(RejectionResponse {
                status: "error",
                message: "Request must contain 'message' field",
            }),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        Json(EchoResponse {
            status: "success",
            received: body,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }),
    )
        .into_response()
}
