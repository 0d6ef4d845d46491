// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use super::chat::chat_handler;
use super::generate_thumbnail::generate_thumbnail_handler;
use crate::auth::SessionVerifier;
use crate::config::AppConfig;
use crate::providers::{ImageGenerator, TextCompleter};
use crate::thumbnail::{QueryRewriter, ReferenceResolver, RequestClassifier};

/// Shared, immutable handler dependencies
#[derive(Clone)]
pub struct AppState {
    /// Image model for thumbnail generation
    pub image_generator: Arc<dyn ImageGenerator>,
    /// Text model for conversational replies
    pub assistant: Arc<dyn TextCompleter>,
    /// Rewrite/enhance pre-pass
    pub rewriter: QueryRewriter,
    pub session_verifier: Arc<dyn SessionVerifier>,
    pub classifier: Arc<RequestClassifier>,
    pub references: ReferenceResolver,
    /// Allowed CORS origins; "*" allows any
    pub cors_allowed_origins: Vec<String>,
    /// Request body cap applied to every route
    pub max_body_bytes: usize,
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(parsed))
}

/// Build the router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_allowed_origins);
    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);

    Router::new()
        // Liveness probe
        .route("/health", get(health_handler))
        // Thumbnail endpoints (session required)
        .route("/api/chat", post(chat_handler))
        .route("/api/generate-thumbnail", post(generate_thumbnail_handler))
        .layer(body_limit)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: &AppConfig, state: AppState) -> anyhow::Result<()> {
    let app = create_app(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn health_handler() -> impl IntoResponse {
    let mut body = crate::version::get_version_info();
    body["status"] = serde_json::Value::from("ok");
    Json(body)
}
