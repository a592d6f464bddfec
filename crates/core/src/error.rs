use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found at {}", .path.display())]
    NotFound { entity: &'static str, path: PathBuf },

    #[error("Internal error: {0}")]
    Internal(String),
}
