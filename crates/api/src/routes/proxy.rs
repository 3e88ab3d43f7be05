//! Route definition for the asset relay endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::proxy;
use crate::state::AppState;

/// Route for relaying model assets.
///
/// ```text
/// GET /proxy-glb           proxy_glb
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/proxy-glb", get(proxy::proxy_glb))
}
