//! # HTTP Server
//!
//! Route table, CORS and request tracing around the API handlers.

use std::sync::Arc;

use axum::http::{header::CONTENT_TYPE, Method};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::api_routes::{api_routes, ApiState};
use super::observability_routes::health_routes;
use crate::config::Settings;
use crate::observability::Event;
use crate::store::Store;

/// HTTP server for the shopfront API
pub struct HttpServer {
    settings: Settings,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given store
    pub fn new(settings: Settings, store: Arc<dyn Store>) -> Self {
        let router = build_router(store);
        Self { settings, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.settings.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C or SIGTERM
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.settings.socket_addr()).await?;
        let addr = listener.local_addr()?;

        info!(
            event = %Event::Serving,
            addr = %addr,
            "server is running at http://{}",
            addr
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

/// Build the full router: `/api/*` plus `/health`, with permissive CORS
pub fn build_router(store: Arc<dyn Store>) -> Router {
    let state = Arc::new(ApiState::new(store));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .merge(health_routes(state.clone()))
        .nest("/api", api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(event = %Event::ShutdownStart, "shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_server_socket_addr() {
        let settings = Settings {
            port: 8080,
            ..Settings::default()
        };
        let server = HttpServer::new(settings, Arc::new(MemoryStore::new()));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new(Settings::default(), Arc::new(MemoryStore::new()));
        let _router = server.router();
    }
}
