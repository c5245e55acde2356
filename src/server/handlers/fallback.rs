use axum::{Json, http::Uri};
use serde_json::{Value, json};

pub async fn catch_all(uri: Uri) -> Json<Value> {
    let path = uri.path().strip_prefix('/').unwrap_or(uri.path());
    Json(json!({ "message": "request logged", "path": path }))
}
