//! # HTTP Server
//!
//! Binds the configured address and serves the catalog router with CORS and
//! per-request tracing.

use axum::Router;
use axum::http::HeaderValue;
use foodie_config::ServerConfig;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::router::router;
use crate::state::AppState;

/// HTTP server for the catalog API.
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    #[must_use]
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        let router = router(state)
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config));
        Self { config, router }
    }

    /// Get the socket address
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    #[must_use]
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the address cannot be bound or the server fails.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?;
        tracing::info!(%addr, "FoodieFinds API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

/// CORS policy: any origin when none are configured, otherwise the listed ones.
/// `FoodieConfig::validate` rejects origins that would fail to parse here.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if !config.restricts_origins() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to install Ctrl-C handler; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
