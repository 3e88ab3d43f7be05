pub mod health;
pub mod proxy;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// POST /generate           start preview generation
/// GET  /status/{task_id}   poll task status
/// POST /refine             start mesh refinement
/// GET  /proxy-glb          relay a model asset
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(tasks::router()).merge(proxy::router())
}
