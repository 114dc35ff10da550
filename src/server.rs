use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::api::openapi::{OPENAPI_PATH, get_openapi_json};
use crate::api::spaces;
use crate::config::Config;
use crate::store::SpaceStore;

/// HTTP server
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    store: Arc<SpaceStore>,
    config: Config,
}

impl Server {
    /// Bind the listener on `config.server_addr`, serving `store`
    pub async fn bind(config: Config, store: Arc<SpaceStore>) -> std::io::Result<Self> {
        let listener = TcpListener::bind(&config.server_addr).await?;
        let local_addr = listener.local_addr()?;
        info!("HTTP server bound to {}", local_addr);

        Ok(Self {
            listener,
            local_addr,
            store,
            config,
        })
    }

    /// Get local listening address
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Build the router with all routes and middleware
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.store), &self.config)
    }

    /// Serve requests until ctrl-c
    pub async fn run(self) -> std::io::Result<()> {
        let router = self.router();
        info!("Server started, listening on {}", self.local_addr);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

/// Assemble the spaces routes, the optional OpenAPI endpoint, CORS and tracing.
pub fn build_router(store: Arc<SpaceStore>, config: &Config) -> Router {
    let mut router = spaces::routes();
    if config.openapi {
        router = router.route(OPENAPI_PATH, get(get_openapi_json));
    }

    router
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Any origin, method and header
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
