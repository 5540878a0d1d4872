//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Take a finished `routing::Router` and serve it
//! - Wire up middleware (tracing, request timeout)
//! - Stop accepting on the shutdown signal and drain in-flight requests

use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::routing::Router;

/// HTTP server hosting a parameter-persisting router.
pub struct HttpServer {
    app: axum::Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server. A configured strategy replaces the router's
    /// current one; otherwise the router's strategy is left as set.
    pub fn new(config: ServerConfig, router: Router) -> Self {
        if let Some(mode) = config.persist {
            mode.apply(router.persist());
            tracing::info!(persist = %mode, "Persistence strategy configured");
        }

        let app = Self::build_app(&config, router);
        Self { app, config }
    }

    /// Layer middleware over the router.
    #[allow(deprecated)]
    fn build_app(config: &ServerConfig, router: Router) -> axum::Router {
        router
            .into_inner()
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
