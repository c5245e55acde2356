use axum::{
    Json,
    response::{IntoResponse, Response},
};

use crate::server::AppState;

// 静态模型目录，与请求体和请求头无关
pub(crate) fn list_models(app_state: &AppState) -> Response {
    (app_state.cors.headers(), Json(app_state.catalog.list())).into_response()
}
