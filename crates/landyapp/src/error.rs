use crate::generator::GenerateError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum LandyError {
    #[error("Page not found: {0}")]
    PageNotFound(Uuid),

    #[error("Section not found: {0}")]
    SectionNotFound(Uuid),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerateError),

    #[error("Version conflict on page {page_id}: expected {expected}, stored {actual}")]
    Conflict {
        page_id: Uuid,
        expected: u64,
        actual: u64,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, LandyError>;
