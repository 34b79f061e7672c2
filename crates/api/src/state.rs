use std::sync::Arc;

use postline_db::PostGateway;

use crate::config::ServerConfig;
use crate::services::PostService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway, built once at startup.
    pub gateway: Arc<dyn PostGateway>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn PostGateway>, config: ServerConfig) -> Self {
        Self {
            gateway,
            config: Arc::new(config),
        }
    }

    /// Resource service bound to this state's gateway.
    pub fn posts(&self) -> PostService {
        PostService::new(Arc::clone(&self.gateway))
    }
}
