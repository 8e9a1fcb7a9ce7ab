//! Application startup and lifecycle management.
//!
//! Builds the router, binds the listener, and runs the server until a
//! shutdown signal arrives. Binding is split from serving so tests can
//! spawn the application on port 0 and discover the assigned port.

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::api;
use crate::config::Config;
use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    message: String,
}

/// Request ID middleware - adds unique ID to each request for tracing
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Relay is healthy".to_string(),
    })
}

/// Build the application router with all routes and middleware
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/chat", post(api::chat::chat))
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive()) // Allow CORS for development
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// Binds the listener immediately; port 0 in the configuration yields a
    /// random free port, retrievable via [`Application::port`].
    pub async fn build(config: Config) -> anyhow::Result<Self> {
        let addr: SocketAddr = config
            .server_addr()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

        let listener = TcpListener::bind(&addr).await?;
        let port = listener.local_addr()?.port();

        let state = AppState::new(config)?;

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        let app = app(self.state);

        info!("🚀 Server running on http://{}", self.listener.local_addr()?);
        info!("Version: {}", env!("CARGO_PKG_VERSION"));

        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server shutdown complete");
        Ok(())
    }
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
