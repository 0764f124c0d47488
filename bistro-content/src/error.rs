//! Error types for content storage

use std::path::PathBuf;
use thiserror::Error;

use crate::types::{AssetId, PageId};

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors that can occur in content storage operations
#[derive(Debug, Error)]
pub enum ContentError {
    /// Content directory has no site file
    #[error("content directory not initialized: {path}")]
    NotInitialized { path: PathBuf },

    /// Page not found by id
    #[error("page not found: {id}")]
    PageNotFound { id: PageId },

    /// Asset not found by id
    #[error("asset not found: {id}")]
    AssetNotFound { id: AssetId },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
