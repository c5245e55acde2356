use axum::{
    Json,
    response::{IntoResponse, Response},
};

use crate::server::AppState;

// 预检请求：空 JSON + CORS
pub(crate) fn preflight(app_state: &AppState) -> Response {
    (app_state.cors.headers(), Json(serde_json::json!({}))).into_response()
}
