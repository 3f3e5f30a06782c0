//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] bizadmin_tabs::TabError),

    #[error("Model error: {0}")]
    Model(#[from] bizadmin_model::ModelError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("View not found: {0}")]
    ViewNotFound(String),

    #[error("Unknown form: {0}")]
    UnknownForm(String),
}
