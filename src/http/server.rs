//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, request ID)
//! - Build the shared upstream client
//! - Serve until the shutdown signal fires

use std::time::Duration;

use axum::{routing::get, Router};
use reqwest::Client;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::{ProxyConfig, UpstreamConfig};
use crate::http::request::ProxyRequestId;
use crate::{docs, health, proxy};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Upstream settings, resolved once at startup.
    pub upstream: UpstreamConfig,
    /// Shared upstream HTTP client (connection pool, timeouts).
    pub client: Client,
}

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails only if the upstream client cannot be constructed (TLS backend
    /// initialization).
    pub fn new(config: ProxyConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .build()?;

        let state = AppState {
            upstream: config.upstream.clone(),
            client,
        };

        Ok(Self {
            router: Self::build_router(state),
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(docs::serve_index))
            .route("/api/health", get(health::health_handler))
            .route(
                "/api/{*path}",
                get(proxy::forward_handler)
                    .post(proxy::forward_handler)
                    .put(proxy::forward_handler)
                    .delete(proxy::forward_handler)
                    .options(proxy::preflight_handler),
            )
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(ProxyRequestId))
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
