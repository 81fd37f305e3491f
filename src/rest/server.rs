//! # HTTP Server
//!
//! Combines the per-resource routers into one application router with CORS
//! and request tracing, and runs it on a tokio TCP listener.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::authors::author_routes;
use super::books::book_routes;
use super::config::ServerConfig;
use super::sections::section_routes;
use super::state::AppState;

/// HTTP server for the bookshelf API.
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server from handler state and configuration.
    pub fn new(state: Arc<AppState>, config: ServerConfig) -> Self {
        let router = Self::build_router(state);
        Self { config, router }
    }

    /// Build the combined router with all resources.
    fn build_router(state: Arc<AppState>) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(author_routes(state.clone()))
            .merge(section_routes(state.clone()))
            .merge(book_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address string.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing).
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(
            addr = %addr,
            database = %self.config.database,
            "bookshelf listening"
        );

        axum::serve(listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    #[test]
    fn test_server_creation() {
        let config = ServerConfig::default();
        let store = Store::open(&config.database);
        let state = Arc::new(AppState::new(&store, &config).unwrap());

        let server = HttpServer::new(state, config);
        assert_eq!(server.socket_addr(), "0.0.0.0:2349");
        let _router = server.router();
    }
}
