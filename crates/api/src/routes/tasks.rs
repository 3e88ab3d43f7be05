//! Route definitions for the task lifecycle endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Routes for starting and polling generation tasks.
///
/// ```text
/// POST /generate           generate_preview
/// GET  /status/{task_id}   get_status
/// POST /refine             generate_refine
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(tasks::generate_preview))
        .route("/status/{task_id}", get(tasks::get_status))
        .route("/refine", post(tasks::generate_refine))
}
