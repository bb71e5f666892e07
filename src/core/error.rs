use crate::json::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieError {
    #[error("Movie '{0}' not found")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Duplicate movie id '{0}'")]
    DuplicateId(String),

    #[error("Seed data error: {0}")]
    Seed(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

pub type Result<T> = std::result::Result<T, MovieError>;

impl From<serde_json::Error> for MovieError {
    fn from(err: serde_json::Error) -> Self {
        MovieError::Seed(err.to_string())
    }
}

impl From<std::io::Error> for MovieError {
    fn from(err: std::io::Error) -> Self {
        MovieError::IoError(err.to_string())
    }
}
