#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `entity` is the caller-facing noun, e.g. "Post" or "Comments".
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),
}
