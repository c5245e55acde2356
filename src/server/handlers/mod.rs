use axum::Router;
use std::sync::Arc;

use crate::server::AppState;

pub(crate) mod chat;
pub(crate) mod fallback;
pub(crate) mod models;
pub(crate) mod preflight;

/// Route table behind the classifier. Everything the classifier does not
/// answer itself ends up in the wildcard fallback.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().fallback(fallback::catch_all)
}
