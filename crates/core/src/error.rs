/// Domain-level errors shared across crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A task id this process never created.
    #[error("Unknown {entity} id: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Caller input was missing or malformed.
    #[error("{0}")]
    Validation(String),
}
