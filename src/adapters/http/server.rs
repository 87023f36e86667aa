//! HTTP server for the planner

use crate::adapters::http::routes;
use crate::adapters::model_artifact::TreeEnsembleClassifier;
use crate::adapters::session::InMemoryResultStore;
use crate::config::PlannerConfig;
use crate::core::planner::PlannerService;
use crate::domain::ports::ResultStore;
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub planner: PlannerService,
    pub store: Arc<dyn ResultStore>,
    pub cookie_name: String,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(planner: PlannerService, store: Arc<dyn ResultStore>, cookie_name: impl Into<String>) -> Self {
        Self {
            planner,
            store,
            cookie_name: cookie_name.into(),
            start_time: Instant::now(),
        }
    }

    /// Loads the model artifacts and sets up the session store.
    pub fn from_config(config: &PlannerConfig) -> crate::utils::error::Result<Self> {
        let classifier = TreeEnsembleClassifier::load(
            &config.model.classifier_path,
            &config.model.label_encoder_path,
        )?;
        let store = InMemoryResultStore::new(config.session_capacity(), config.session_ttl());

        Ok(Self::new(
            PlannerService::new(Arc::new(classifier)),
            Arc::new(store),
            config.session.cookie_name.clone(),
        ))
    }
}

pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(routes::planner_routes())
        .merge(routes::health_routes())
        .with_state(Arc::new(state))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until the process is stopped
pub async fn run(state: AppState, bind: &str, max_body_bytes: usize) -> Result<()> {
    let app = router(state, max_body_bytes);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
