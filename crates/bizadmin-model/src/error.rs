//! Model error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown structure type: {0}")]
    UnknownStructureType(String),

    #[error("Request failed with status {status}: {error}")]
    Response { status: u16, error: String },
}
