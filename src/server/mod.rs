pub mod catalog;
pub mod classifier;
pub mod cors;
pub mod handlers;
pub(crate) mod snapshot;
pub mod storage_traits;
pub mod synthesizer;
pub(crate) mod util;

use crate::config::Settings;
use crate::error::Result as AppResult;
use crate::logging::FileLogStore;
use crate::server::catalog::ModelCatalog;
use crate::server::cors::CorsPolicy;
use crate::server::storage_traits::RequestLogStore;
use axum::{Router, middleware};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: Settings,
    pub catalog: Arc<ModelCatalog>,
    pub cors: CorsPolicy,
    pub log_store: Arc<dyn RequestLogStore + Send + Sync>,
}

impl AppState {
    pub fn new(config: Settings, log_store: Arc<dyn RequestLogStore + Send + Sync>) -> AppResult<Self> {
        let cors = CorsPolicy::from_config(&config.cors)?;
        Ok(Self {
            config,
            catalog: Arc::new(ModelCatalog::builtin()),
            cors,
            log_store,
        })
    }
}

pub async fn create_app(config: Settings) -> AppResult<Router> {
    let store = FileLogStore::open(&config.logging.log_dir).await?;
    tracing::info!("Request records are written to {}", store.dir().display());

    let app_state = AppState::new(config, Arc::new(store))?;
    Ok(router(app_state))
}

pub fn router(app_state: AppState) -> Router {
    let app_state = Arc::new(app_state);
    handlers::routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(
                    app_state.clone(),
                    classifier::classify_and_log,
                )),
        )
        .with_state(app_state)
}
