//! Request-authorization middleware.
//!
//! Responsibilities:
//! - Read path + `Authorization` header off the inbound request
//! - Delegate the decision to the compiled `AccessGate`
//! - On `Allow`: forward the request untouched to the next handler
//! - On `Deny`: short-circuit with a terminal `{"error": ...}` JSON response
//!
//! The gate itself is side-effect free; any logging happens here at the
//! adapter boundary.

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use fleetgate_core::error::ClientCode;

use crate::app_state::AppState;
use crate::policy::Decision;

pub async fn require_access(
    State(app): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match app.gate().evaluate(path, authorization) {
        Decision::Allow => next.run(req).await,
        Decision::Deny { code, msg } => {
            tracing::debug!(path, code = code.as_str(), "request denied");
            deny_response(code, msg)
        }
    }
}

/// Terminal response for a denied request: `{"error": <msg>}` + status code.
pub fn deny_response(code: ClientCode, msg: &str) -> Response {
    let status = StatusCode::from_u16(code.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": msg }))).into_response()
}
