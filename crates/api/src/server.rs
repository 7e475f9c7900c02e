//! Server configuration and startup.

use crate::routes::create_router;
use crate::state::AppState;
use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Only origin allowed to make cross-origin calls; any origin when unset.
    pub frontend_url: Option<String>,
    /// Directory generated reports are written to and served from.
    pub reports_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            frontend_url: None,
            reports_dir: PathBuf::from("reports"),
        }
    }
}

impl ServerConfig {
    /// Address string in `host:port` form.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The API server.
pub struct ApiServer {
    config: ServerConfig,
    state: AppState,
}

impl ApiServer {
    /// Creates a new server.
    #[must_use]
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Builds the router without binding a socket.
    #[must_use]
    pub fn router(&self) -> Router {
        create_router(self.state.clone(), self.config.frontend_url.as_deref())
    }

    /// Binds and serves until Ctrl-C.
    ///
    /// # Errors
    /// Returns an error if the reports directory cannot be created or the
    /// socket cannot be bound.
    pub async fn run(self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.config.reports_dir).await?;

        let listener = TcpListener::bind(self.config.bind_address()).await?;
        let addr: SocketAddr = listener.local_addr()?;
        info!(%addr, "ROI calculator API listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert_eq!(config.reports_dir, PathBuf::from("reports"));
        assert!(config.frontend_url.is_none());
    }
}
