//! # HTTP Server
//!
//! Combines the resource, health and observability routers and serves them.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::Request;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use crate::observability::{log_event, Event};

use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes};
use super::resource_routes::{resource_routes, ResourceState};

/// HTTP server for the resource API
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<ResourceState>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration and a fresh store
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_state(config, Arc::new(ResourceState::new()))
    }

    /// Create a server around existing state
    pub fn with_state(config: HttpServerConfig, state: Arc<ResourceState>) -> Self {
        let router = Self::build_router(&config, Arc::clone(&state));
        Self {
            config,
            state,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<ResourceState>) -> Router {
        let metrics = Arc::clone(&state.metrics);

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                request_id = %Uuid::new_v4(),
                method = %request.method(),
                uri = %request.uri(),
            )
        });

        Router::new()
            .merge(health_routes())
            .nest("/api", resource_routes(state))
            .nest("/observability", observability_routes(metrics))
            .layer(DefaultBodyLimit::max(config.body_limit_bytes))
            .layer(trace)
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Shared state behind the routes
    pub fn state(&self) -> Arc<ResourceState> {
        Arc::clone(&self.state)
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        log_event(Event::ServerStarting);
        let listener = TcpListener::bind(addr).await?;
        info!(event = %Event::Serving, %addr, "endpoints: POST /api/users, /api/books, /api/reviews");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    log_event(Event::ShutdownStart);
}
