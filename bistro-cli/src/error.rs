//! Error types for the bistro CLI

use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// Schema registration failed
    #[error(transparent)]
    Schema(#[from] bistro_fields::SchemaError),

    /// Content could not be read or written
    #[error(transparent)]
    Content(#[from] bistro_content::ContentError),

    /// Rendering failed
    #[error(transparent)]
    Render(#[from] bistro_render::RenderError),

    /// A command precondition did not hold
    #[error("{0}")]
    Validation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
