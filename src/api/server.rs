//! API Server - HTTP server for the analysis REST API

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::analysis::AnalysisService;
use crate::api::handlers::{self, AppState};

/// API Server
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(service: Arc<AnalysisService>, addr: String) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            addr,
        }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        // The analysis form is served from a separate origin
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let api_routes = Router::new()
            .route("/health", get(handlers::health))
            .route("/analyze", post(handlers::analyze))
            .route("/analyze/upload", post(handlers::analyze_upload))
            .route("/stats", get(handlers::stats));

        Router::new()
            .nest("/api", api_routes)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Start the API server
    pub async fn run(&self) -> std::io::Result<()> {
        let router = self.router();

        info!("Starting API server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
