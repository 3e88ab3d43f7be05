//! In-memory task registry.
//!
//! The relay's only persistent state: a map from upstream-assigned task
//! id to the [`Phase`] the task was created in. The phase decides how the
//! upstream status is presented back to the caller for the rest of the
//! task's life.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::error::CoreError;

/// Which stage of the two-phase generation pipeline a task belongs to.
///
/// Fixed when the task is registered; a task is never re-phased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial low-detail preview generation.
    Preview,
    /// Mesh refinement of a completed preview.
    Refine,
}

/// Map from upstream task id to [`Phase`].
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across request handlers. Entries live for the life of the
/// process — there is no expiry or eviction.
pub struct TaskRegistry {
    tasks: RwLock<HashMap<String, Phase>>,
}

impl TaskRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(HashMap::new()),
        }
    }

    /// Record the phase of a freshly created upstream task.
    ///
    /// Upstream ids are unique per creation call, so an id is only ever
    /// inserted once.
    pub async fn insert(&self, task_id: String, phase: Phase) {
        self.tasks.write().await.insert(task_id, phase);
    }

    /// Look up the phase a task was registered with.
    ///
    /// Fails with [`CoreError::NotFound`] for ids this process never
    /// created.
    pub async fn phase_of(&self, task_id: &str) -> Result<Phase, CoreError> {
        self.tasks
            .read()
            .await
            .get(task_id)
            .copied()
            .ok_or_else(|| CoreError::NotFound {
                entity: "task",
                id: task_id.to_string(),
            })
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn insert_then_lookup_returns_phase() {
        let registry = TaskRegistry::new();
        registry.insert("t1".to_string(), Phase::Preview).await;

        assert_eq!(registry.phase_of("t1").await.unwrap(), Phase::Preview);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let registry = TaskRegistry::new();

        let err = registry.phase_of("missing").await.unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "task", ref id } if id == "missing");
    }

    #[tokio::test]
    async fn phases_are_tracked_per_id() {
        let registry = TaskRegistry::new();
        registry.insert("p".to_string(), Phase::Preview).await;
        registry.insert("r".to_string(), Phase::Refine).await;

        assert_eq!(registry.phase_of("p").await.unwrap(), Phase::Preview);
        assert_eq!(registry.phase_of("r").await.unwrap(), Phase::Refine);
    }

    #[tokio::test]
    async fn lookup_does_not_mutate() {
        let registry = TaskRegistry::new();
        registry.insert("t1".to_string(), Phase::Refine).await;

        for _ in 0..3 {
            assert_eq!(registry.phase_of("t1").await.unwrap(), Phase::Refine);
        }
        assert!(registry.phase_of("t2").await.is_err());
    }
}
