use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Post not found")]
    NotFound,

    #[error("Internal server error")]
    InternalServerError,

    #[error("Invalid date value '{value}' for filter field '{field}'")]
    InvalidDateFilter { field: String, value: String },
}
