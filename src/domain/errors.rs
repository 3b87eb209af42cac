//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Session provider error: {0}")]
    Session(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Content error: {0}")]
    Content(String),

    /// Two posts in the aggregated catalog share an id.
    #[error("Duplicate post id '{id}' (categories: {first_category}, {second_category})")]
    DuplicatePostId {
        id: String,
        first_category: String,
        second_category: String,
    },

    /// A post lists a related id that is not in the catalog.
    #[error("Post '{post}' references unknown related post '{related}'")]
    DanglingRelatedPost { post: String, related: String },

    #[error("Export failed: {0}")]
    Export(String),

    #[error("UI error: {0}")]
    Ui(String),
}
