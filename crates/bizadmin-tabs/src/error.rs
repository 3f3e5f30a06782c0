//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Tab set must contain at least one tab")]
    EmptyTabSet,

    #[error("Duplicate tab in set: {0}")]
    DuplicateTab(String),
}
