//! Single interception point for every inbound call.
//!
//! Each request is snapshotted and recorded before any routing decision, then
//! answered according to [`classify`]. Chat completions are therefore logged
//! exactly once, whichever path prefix the client used.

use std::sync::Arc;

use axum::{
    Json,
    body::Body,
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::MockError;
use crate::logging::LogHandle;
use crate::server::{AppState, handlers, snapshot, util};

pub const MODELS_SUFFIXES: [&str; 2] = ["/models", "/v1/models"];
pub const CHAT_COMPLETIONS_SUFFIXES: [&str; 2] = ["/chat/completions", "/v1/chat/completions"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// `OPTIONS` on any path.
    Preflight,
    ListModels,
    ChatCompletion,
    /// Handed to the route table.
    Delegate,
}

/// Decides the behavior for a request. Precedence: preflight, then the
/// models suffix, then the chat completions suffix.
pub fn classify(method: &Method, path: &str) -> Behavior {
    if method == Method::OPTIONS {
        Behavior::Preflight
    } else if MODELS_SUFFIXES.iter().any(|s| path.ends_with(s)) {
        Behavior::ListModels
    } else if CHAT_COMPLETIONS_SUFFIXES.iter().any(|s| path.ends_with(s)) {
        Behavior::ChatCompletion
    } else {
        Behavior::Delegate
    }
}

pub async fn classify_and_log(
    State(app_state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();
    let (bytes, body_error) =
        match axum::body::to_bytes(body, app_state.config.server.max_body_bytes).await {
            Ok(bytes) => (bytes, None),
            Err(e) => (Default::default(), Some(MockError::BodyRead(e.to_string()))),
        };

    let inbound = snapshot::capture(&parts, &bytes, &app_state.config.server.bind_addr());

    let api_key = util::bearer_token(&parts.headers);
    if let Some(key) = api_key.as_deref() {
        tracing::debug!(api_key = %util::mask_key(key), "API key presented");
    }
    if !util::verify_api_key(api_key.as_deref()) {
        return error_response(&app_state, StatusCode::UNAUTHORIZED, "invalid API key");
    }

    let record = match app_state.log_store.write_initial(&inbound).await {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::error!(
                method = %inbound.method,
                path = %inbound.path,
                error = %e,
                "Failed to write request record"
            );
            if app_state.config.logging.strict {
                return error_response(&app_state, status_for(&e), &e.to_string());
            }
            None
        }
    };

    let behavior = classify(&parts.method, parts.uri.path());
    tracing::info!(
        method = %parts.method,
        path = %parts.uri.path(),
        record = record.as_ref().map(|h| h.id.as_str()).unwrap_or("-"),
        ?behavior,
        "request"
    );

    match behavior {
        Behavior::Preflight => handlers::preflight::preflight(&app_state),
        Behavior::ListModels => handlers::models::list_models(&app_state),
        Behavior::ChatCompletion => {
            // 只有对话补全需要请求体；其它分支按空请求体继续
            if let Some(e) = body_error {
                tracing::warn!(error = %e, "Chat completion body could not be read");
                record_status(&app_state, record.as_ref(), StatusCode::BAD_REQUEST.as_u16()).await;
                return error_response(&app_state, StatusCode::BAD_REQUEST, &e.to_string());
            }
            match handlers::chat::chat_completions(&app_state, &bytes, record.as_ref()).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(error = %e, "Chat completion request rejected");
                    error_response(&app_state, status_for(&e), &e.to_string())
                }
            }
        }
        Behavior::Delegate => {
            let request = axum::http::Request::from_parts(parts, Body::from(bytes));
            let mut response = next.run(request).await;
            let status = response.status().as_u16();
            if !record_status(&app_state, record.as_ref(), status).await
                && app_state.config.logging.strict
            {
                return error_response(
                    &app_state,
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to record response status",
                );
            }
            // 为所有响应补充 CORS 头
            app_state.cors.apply(response.headers_mut());
            response
        }
    }
}

/// Appends `status` to the record; returns false if the append failed.
async fn record_status(app_state: &AppState, record: Option<&LogHandle>, status: u16) -> bool {
    let Some(handle) = record else {
        return true;
    };
    match app_state.log_store.append_status(handle, status).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(record = %handle.id, error = %e, "Failed to append response status");
            false
        }
    }
}

fn status_for(err: &MockError) -> StatusCode {
    match err {
        MockError::Json(_) | MockError::InvalidRequest(_) | MockError::BodyRead(_) => {
            StatusCode::BAD_REQUEST
        }
        MockError::Io(_) | MockError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(app_state: &AppState, status: StatusCode, message: &str) -> Response {
    (
        status,
        app_state.cors.headers(),
        Json(json!({ "error": message })),
    )
        .into_response()
}
