use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Progression ledger HTTP server.
pub struct ProgressionServer {
    config: ServerConfig,
}

impl ProgressionServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router over config-selected storage (useful for testing).
    pub fn router(&self) -> ServerResult<axum::Router> {
        Ok(build_router(AppState::from_config(&self.config)?))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("OPL server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = ProgressionServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:8420".parse().unwrap());
    }

    #[test]
    fn router_builds() {
        let server = ProgressionServer::new(ServerConfig::default());
        let _router = server.router().unwrap();
    }
}
