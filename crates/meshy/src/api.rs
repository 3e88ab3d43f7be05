//! REST API client for the Meshy text-to-3D endpoints.
//!
//! Wraps the Meshy v2 HTTP API (task creation in preview and refine
//! modes, task status retrieval) using [`reqwest`].

use meshforge_core::task::TextTo3DTask;
use serde::{Deserialize, Serialize};

/// Default production endpoint for the Meshy v2 text-to-3D API.
pub const DEFAULT_API_BASE: &str = "https://api.meshy.ai/openapi/v2/text-to-3d";

/// Model identifier pinned for all creation requests.
const AI_MODEL: &str = "meshy-5";

/// Art style applied when the caller does not pick one.
const DEFAULT_ART_STYLE: &str = "realistic";

/// HTTP client for the Meshy text-to-3D API.
pub struct MeshyApi {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

/// Body of a `mode=preview` creation request.
#[derive(Debug, Serialize)]
struct CreatePreviewBody<'a> {
    mode: &'static str,
    prompt: &'a str,
    art_style: &'a str,
    should_remesh: bool,
    ai_model: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    negative_prompt: Option<&'a str>,
}

/// Body of a `mode=refine` creation request.
#[derive(Debug, Serialize)]
struct CreateRefineBody<'a> {
    mode: &'static str,
    preview_task_id: &'a str,
    ai_model: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    negative_prompt: Option<&'a str>,
}

/// Response returned by the creation endpoint after queuing a task.
#[derive(Debug, Deserialize)]
pub struct CreateTaskResponse {
    /// Server-assigned task identifier. `None` when the upstream accepted
    /// the request but returned no id.
    pub result: Option<String>,
}

/// Errors from the Meshy REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum MeshyApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream returned a non-2xx status code.
    #[error("Meshy API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl MeshyApi {
    /// Create a new API client.
    ///
    /// * `api_base` - Base URL of the text-to-3D endpoint, e.g.
    ///   [`DEFAULT_API_BASE`]. A trailing slash is stripped.
    /// * `api_key`  - Bearer token for the `Authorization` header.
    pub fn new(api_base: impl Into<String>, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, api_base: impl Into<String>, api_key: String) -> Self {
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Base URL this client targets.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Queue a preview-mode generation task.
    ///
    /// Sends `POST {base}` with the prompt and fixed generation settings.
    /// `art_style` falls back to `"realistic"`; `negative_prompt` is
    /// omitted from the payload entirely when `None`.
    pub async fn create_preview_task(
        &self,
        prompt: &str,
        art_style: Option<&str>,
        negative_prompt: Option<&str>,
    ) -> Result<CreateTaskResponse, MeshyApiError> {
        let body = CreatePreviewBody {
            mode: "preview",
            prompt,
            art_style: art_style.unwrap_or(DEFAULT_ART_STYLE),
            should_remesh: true,
            ai_model: AI_MODEL,
            negative_prompt,
        };

        tracing::debug!(mode = "preview", "Submitting text-to-3D task");

        let response = self
            .client
            .post(&self.api_base)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Queue a refine-mode task for a previously generated preview.
    ///
    /// Sends `POST {base}` referencing the preview task id. The id is
    /// forwarded as-is; the upstream rejects ids it does not know.
    pub async fn create_refine_task(
        &self,
        preview_task_id: &str,
        negative_prompt: Option<&str>,
    ) -> Result<CreateTaskResponse, MeshyApiError> {
        let body = CreateRefineBody {
            mode: "refine",
            preview_task_id,
            ai_model: AI_MODEL,
            negative_prompt,
        };

        tracing::debug!(mode = "refine", preview_task_id, "Submitting text-to-3D task");

        let response = self
            .client
            .post(&self.api_base)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the current state of a task.
    ///
    /// Sends `GET {base}/{task_id}` and parses the task resource.
    pub async fn get_task(&self, task_id: &str) -> Result<TextTo3DTask, MeshyApiError> {
        let response = self
            .client
            .get(format!("{}/{}", self.api_base, task_id))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`MeshyApiError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, MeshyApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(MeshyApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, MeshyApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_strips_trailing_slash() {
        let api = MeshyApi::new("http://localhost:9000/", "key".to_string());
        assert_eq!(api.api_base(), "http://localhost:9000");
    }

    #[test]
    fn preview_body_includes_fixed_settings() {
        let body = CreatePreviewBody {
            mode: "preview",
            prompt: "a red chair",
            art_style: DEFAULT_ART_STYLE,
            should_remesh: true,
            ai_model: AI_MODEL,
            negative_prompt: None,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["mode"], "preview");
        assert_eq!(json["prompt"], "a red chair");
        assert_eq!(json["art_style"], "realistic");
        assert_eq!(json["should_remesh"], true);
        assert_eq!(json["ai_model"], "meshy-5");
    }

    #[test]
    fn preview_body_omits_absent_negative_prompt() {
        let body = CreatePreviewBody {
            mode: "preview",
            prompt: "a red chair",
            art_style: DEFAULT_ART_STYLE,
            should_remesh: true,
            ai_model: AI_MODEL,
            negative_prompt: None,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("negative_prompt").is_none());
    }

    #[test]
    fn preview_body_keeps_supplied_negative_prompt() {
        let body = CreatePreviewBody {
            mode: "preview",
            prompt: "a red chair",
            art_style: "cartoon",
            should_remesh: true,
            ai_model: AI_MODEL,
            negative_prompt: Some("low poly"),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["art_style"], "cartoon");
        assert_eq!(json["negative_prompt"], "low poly");
    }

    #[test]
    fn refine_body_references_preview_task() {
        let body = CreateRefineBody {
            mode: "refine",
            preview_task_id: "prev-1",
            ai_model: AI_MODEL,
            negative_prompt: None,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["mode"], "refine");
        assert_eq!(json["preview_task_id"], "prev-1");
        assert_eq!(json["ai_model"], "meshy-5");
        assert!(json.get("negative_prompt").is_none());
        assert!(json.get("should_remesh").is_none());
    }

    #[test]
    fn create_response_tolerates_missing_result() {
        let resp: CreateTaskResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.result.is_none());

        let resp: CreateTaskResponse = serde_json::from_str(r#"{"result":"t-1"}"#).unwrap();
        assert_eq!(resp.result.as_deref(), Some("t-1"));
    }
}
