use agent_exposure_common::ExposureConfig;
use anyhow::{Context, Result};
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{
    middleware::{get_tracing_layer, logging_middleware},
    openapi,
    routes::{assess, health, questions, sessions},
    sessions::SessionStore,
};

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ExposureConfig>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: ExposureConfig) -> Self {
        let sessions = SessionStore::new(config.server.max_sessions);
        Self {
            config: Arc::new(config),
            sessions,
        }
    }
}

pub struct ExposureServer {
    state: AppState,
}

impl ExposureServer {
    pub fn new(config: ExposureConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health::health))
            .route("/questions", get(questions::list_questions))
            .route("/assess", post(assess::assess_profile))
            .route("/sessions", post(sessions::create_session))
            .route(
                "/sessions/:session_id",
                get(sessions::get_session).delete(sessions::delete_session),
            )
            .route("/sessions/:session_id/answers/:step", put(sessions::set_answer))
            .route("/sessions/:session_id/advance", post(sessions::advance))
            .route("/sessions/:session_id/retreat", post(sessions::retreat))
            .route("/sessions/:session_id/reset", post(sessions::reset))
            .route("/sessions/:session_id/result", get(sessions::get_result))
            .route("/api-doc/openapi.json", get(openapi::openapi_json))
            .layer(middleware::from_fn(logging_middleware))
            .layer(get_tracing_layer())
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Bind to the configured address and serve until Ctrl-C
    pub async fn run(self) -> Result<()> {
        let addr = self.state.config.bind_addr()?;
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("Assessment API listening on http://{}", addr);
        info!("OpenAPI document at http://{}/api-doc/openapi.json", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        info!("Assessment API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
