//! HTTP server: the scrape endpoint and the web form that calls it.

pub mod assets;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::Result;
use crate::config::ServerConfig;
use crate::scraper::Scraper;

/// Shared by every request. Holds no per-request state.
pub struct ServerState {
    pub scraper: Arc<dyn Scraper>,
}

/// Create the Axum router.
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(assets::serve_index))
        .route("/app.js", get(assets::serve_js))
        .route("/style.css", get(assets::serve_css))
        .route(
            "/api/fetch-keywords",
            post(handlers::fetch_keywords).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub struct KwServer {
    config: ServerConfig,
    state: Arc<ServerState>,
}

impl KwServer {
    pub fn new(config: ServerConfig, scraper: Arc<dyn Scraper>) -> Self {
        Self {
            config,
            state: Arc::new(ServerState { scraper }),
        }
    }

    pub fn addr(&self) -> String {
        self.config.addr()
    }

    /// Bind the listener; split from [`serve`](Self::serve) so callers learn
    /// the real address before the server starts (port 0 in tests).
    pub async fn bind(&self) -> Result<TcpListener> {
        Ok(TcpListener::bind(self.addr()).await?)
    }

    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let app = create_router(self.state.clone());
        info!("Listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
