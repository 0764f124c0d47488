//! Error types for rendering

use thiserror::Error;

/// Result type for render operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering pages
#[derive(Debug, Error)]
pub enum RenderError {
    /// Schema registration failed
    #[error(transparent)]
    Schema(#[from] bistro_fields::SchemaError),

    /// Content could not be read
    #[error(transparent)]
    Content(#[from] bistro_content::ContentError),
}
