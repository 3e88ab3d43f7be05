//! HTTP client for the Meshy text-to-3D API.
//!
//! Wraps the two upstream endpoints the relay consumes: task creation
//! (preview and refine modes) and task status retrieval, both behind
//! bearer-token authentication.

pub mod api;

pub use api::{CreateTaskResponse, MeshyApi, MeshyApiError};
