//! Phase-aware translation of upstream task status into the caller-facing
//! vocabulary.
//!
//! The same upstream `SUCCEEDED` means different things depending on the
//! phase the task was created in: a finished preview is `PREVIEW_READY`
//! (there is still a refine step available), a finished refine is
//! `COMPLETED`. Failures and in-flight states are phase-independent.

use serde::Serialize;

use crate::registry::Phase;
use crate::task::{ModelUrls, TaskState, TextTo3DTask};

/// Caller-facing view of a task's current status.
///
/// Exactly one row of the translation table. Serializes flat, always
/// carrying `task_id` and `status`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StatusView {
    /// Preview phase finished; the low-detail model is ready.
    PreviewReady {
        task_id: String,
        status: &'static str,
        preview_model_url: Option<String>,
    },
    /// Refine phase finished; all produced asset formats are listed.
    Completed {
        task_id: String,
        status: &'static str,
        model_urls: ModelUrls,
    },
    /// The task failed upstream. A normal result, not a transport error.
    Failed {
        task_id: String,
        status: &'static str,
        error: Option<String>,
    },
    /// Any other upstream state, passed through verbatim.
    InFlight {
        task_id: String,
        status: TaskState,
        progress: u32,
    },
}

/// Apply the status-translation policy.
///
/// Deterministic in `(phase, task.status, task payload)`; reads nothing
/// else and mutates nothing.
pub fn translate(task_id: &str, phase: Phase, task: &TextTo3DTask) -> StatusView {
    match (phase, &task.status) {
        (Phase::Preview, TaskState::Succeeded) => StatusView::PreviewReady {
            task_id: task_id.to_string(),
            status: "PREVIEW_READY",
            preview_model_url: task.model_urls.as_ref().and_then(|urls| urls.glb.clone()),
        },
        (Phase::Refine, TaskState::Succeeded) => StatusView::Completed {
            task_id: task_id.to_string(),
            status: "COMPLETED",
            model_urls: task.model_urls.clone().unwrap_or_default(),
        },
        (_, TaskState::Failed) => StatusView::Failed {
            task_id: task_id.to_string(),
            status: "FAILED",
            error: task.task_error.as_ref().and_then(|e| e.message.clone()),
        },
        (_, state) => StatusView::InFlight {
            task_id: task_id.to_string(),
            status: state.clone(),
            progress: task.progress,
        },
    }
}
