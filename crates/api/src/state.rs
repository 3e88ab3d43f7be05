use std::sync::Arc;

use meshforge_core::registry::TaskRegistry;
use meshforge_meshy::MeshyApi;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Task-id → phase registry, the relay's only in-process state.
    pub registry: Arc<TaskRegistry>,
    /// Upstream Meshy API client.
    pub meshy: Arc<MeshyApi>,
    /// Plain HTTP client for the asset relay (no auth attached).
    pub http: reqwest::Client,
}
