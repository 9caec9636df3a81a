use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid registration data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("event not found: {0}")]
    EventNotFound(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
