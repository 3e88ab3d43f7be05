//! Handler for the model asset relay.
//!
//! Route:
//! - `GET /api/proxy-glb?url=<url>` — stream a hosted asset to the caller
//!
//! The generated models live on the provider's asset CDN, which browsers
//! cannot fetch directly from a local page; this endpoint relays the
//! bytes instead. The URL is not checked against an allow-list.

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use meshforge_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Content type assumed when the asset host reports none.
const DEFAULT_CONTENT_TYPE: &str = "model/gltf-binary";

/// Query parameters for `GET /api/proxy-glb`.
#[derive(Debug, Deserialize)]
pub struct ProxyParams {
    #[serde(default)]
    pub url: Option<String>,
}

/// GET /api/proxy-glb?url=...
///
/// Streams the response body of the given URL back to the caller,
/// preserving the content type the asset host reports.
pub async fn proxy_glb(
    State(state): State<AppState>,
    Query(params): Query<ProxyParams>,
) -> AppResult<Response> {
    let url = params
        .url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("url query param required".to_string())))?;

    let upstream = state.http.get(&url).send().await?.error_for_status()?;

    let content_type = upstream
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();

    tracing::debug!(%url, %content_type, "Relaying asset");

    let body = Body::from_stream(upstream.bytes_stream());
    Ok(([(CONTENT_TYPE, content_type)], body).into_response())
}
