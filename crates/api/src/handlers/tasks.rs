//! Handlers for the text-to-3D task lifecycle.
//!
//! Routes:
//! - `POST /api/generate`         — start preview generation
//! - `GET  /api/status/{task_id}` — poll task status
//! - `POST /api/refine`           — start mesh refinement
//!
//! `generate` and `refine` both create a task upstream and record its
//! phase in the registry; `status` reads the phase back to decide how the
//! live upstream state is presented. `refine` reports every failure as a
//! 500 with a `details` body, so its callers see a single failure shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use meshforge_core::error::CoreError;
use meshforge_core::registry::Phase;
use meshforge_core::status;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body of `POST /api/generate`.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub art_style: Option<String>,
    #[serde(default)]
    pub negative_prompt: Option<String>,
}

/// Body of `POST /api/refine`.
#[derive(Debug, Default, Deserialize)]
pub struct RefineRequest {
    #[serde(default)]
    pub preview_task_id: Option<String>,
    #[serde(default)]
    pub negative_prompt: Option<String>,
}

/// `{ task_id, status: "PENDING" }` payload returned by both creation
/// endpoints.
#[derive(Debug, Serialize)]
pub struct TaskCreated {
    pub task_id: String,
    pub status: &'static str,
}

/// Treat an absent or empty optional string as not supplied.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// POST /api/generate
///
/// Validates the prompt, creates a `mode=preview` task upstream, and
/// registers the returned id in the [`Phase::Preview`] phase.
pub async fn generate_preview(
    State(state): State<AppState>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    // An unreadable body is treated the same as an empty one: the prompt
    // check below rejects it.
    let input = body.map(|Json(b)| b).unwrap_or_default();

    let prompt = input.prompt.as_deref().map(str::trim).unwrap_or("");
    if prompt.is_empty() {
        return Err(CoreError::Validation("Prompt is required".to_string()).into());
    }

    let created = state
        .meshy
        .create_preview_task(
            prompt,
            input.art_style.as_deref(),
            non_empty(input.negative_prompt.as_deref()),
        )
        .await?;

    let task_id = created
        .result
        .ok_or_else(|| AppError::UpstreamProtocol("No task ID returned".to_string()))?;

    state.registry.insert(task_id.clone(), Phase::Preview).await;
    tracing::info!(%task_id, "Preview task created");

    Ok(Json(TaskCreated {
        task_id,
        status: "PENDING",
    }))
}

/// GET /api/status/{task_id}
///
/// Status can only be checked for tasks this process created; the phase
/// recorded at creation decides how the live upstream state is presented.
/// `FAILED` and in-flight states are ordinary 200 results.
pub async fn get_status(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let phase = state.registry.phase_of(&task_id).await?;
    let task = state.meshy.get_task(&task_id).await?;

    Ok(Json(status::translate(&task_id, phase, &task)))
}

/// POST /api/refine
///
/// Unlike `generate_preview`, every failure here — body parse,
/// validation, transport, protocol — is collapsed into a 500 with a
/// `details` message. The preview id is forwarded upstream without
/// checking the registry; the upstream rejects ids it does not know.
pub async fn generate_refine(
    State(state): State<AppState>,
    body: Result<Json<RefineRequest>, JsonRejection>,
) -> Response {
    match try_generate_refine(&state, body).await {
        Ok(created) => Json(created).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Refine task creation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "details": err.to_string() })),
            )
                .into_response()
        }
    }
}

/// Fallible body of [`generate_refine`].
async fn try_generate_refine(
    state: &AppState,
    body: Result<Json<RefineRequest>, JsonRejection>,
) -> AppResult<TaskCreated> {
    let input = match body {
        Ok(Json(input)) => input,
        Err(rejection) => {
            return Err(CoreError::Validation(rejection.body_text()).into());
        }
    };

    let preview_task_id = non_empty(input.preview_task_id.as_deref())
        .ok_or_else(|| CoreError::Validation("preview_task_id is required".to_string()))?;

    let created = state
        .meshy
        .create_refine_task(preview_task_id, non_empty(input.negative_prompt.as_deref()))
        .await?;

    let task_id = created
        .result
        .ok_or_else(|| AppError::UpstreamProtocol("No refine ID returned".to_string()))?;

    state.registry.insert(task_id.clone(), Phase::Refine).await;
    tracing::info!(%task_id, preview_task_id, "Refine task created");

    Ok(TaskCreated {
        task_id,
        status: "PENDING",
    })
}
