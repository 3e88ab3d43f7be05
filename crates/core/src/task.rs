//! Typed model of the upstream text-to-3D task resource.
//!
//! Replaces ad-hoc JSON field access with a tagged/optional-field
//! structure so the status translation in [`crate::status`] can match
//! exhaustively. Only the fields the relay reads are modelled; anything
//! else the upstream sends is ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Raw lifecycle state reported by the upstream provider.
///
/// Unknown states deserialize into [`TaskState::Other`] and serialize
/// back verbatim, so new upstream vocabulary passes through to callers
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    Pending,
    InProgress,
    Succeeded,
    Failed,
    Canceled,
    #[serde(untagged)]
    Other(String),
}

/// Download URLs for the generated model, per asset format.
///
/// Every field is optional; which formats are present depends on the
/// task phase and what the upstream produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fbx: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usdz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Failure detail attached to a `FAILED` task.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskError {
    /// Human-readable failure message; the upstream may omit it.
    pub message: Option<String>,
}

/// A text-to-3D task as reported by the upstream status endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TextTo3DTask {
    pub status: TaskState,
    /// Completion percentage, 0-100. Defaults to 0 when the upstream
    /// omits it.
    #[serde(default)]
    pub progress: u32,
    pub model_urls: Option<ModelUrls>,
    pub task_error: Option<TaskError>,
}
