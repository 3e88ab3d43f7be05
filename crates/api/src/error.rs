use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use meshforge_core::error::CoreError;
use meshforge_meshy::MeshyApiError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`MeshyApiError`] for
/// upstream failures. Implements [`IntoResponse`] to produce consistent
/// JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `meshforge_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Transport failure or non-success status from the upstream provider.
    #[error(transparent)]
    Upstream(#[from] MeshyApiError),

    /// A well-formed upstream response missing an expected field.
    #[error("{0}")]
    UpstreamProtocol(String),

    /// Failure fetching a caller-supplied asset URL.
    #[error("Asset fetch failed: {0}")]
    AssetFetch(#[from] reqwest::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            AppError::Upstream(err) => {
                tracing::error!(error = %err, "Upstream request failed");
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", err.to_string())
            }

            AppError::UpstreamProtocol(msg) => {
                tracing::error!(error = %msg, "Upstream protocol error");
                (StatusCode::BAD_GATEWAY, "UPSTREAM_PROTOCOL_ERROR", msg.clone())
            }

            AppError::AssetFetch(err) => {
                tracing::error!(error = %err, "Asset fetch failed");
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", err.to_string())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
