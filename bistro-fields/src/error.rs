//! Error types for schema registration

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors that can occur while building the schema registry
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two fields in the same schema share a key
    #[error("duplicate field key '{key}' in schema '{template}'")]
    DuplicateFieldKey { template: String, key: String },

    /// Two sub-fields in the same group share a key
    #[error("duplicate sub-field key '{key}' in group '{group}'")]
    DuplicateSubFieldKey { group: String, key: String },

    /// A sub-field uses a key the edit panel reserves for itself
    #[error("sub-field key '{key}' in group '{group}' is reserved")]
    ReservedSubFieldKey { group: String, key: String },

    /// The same template was registered twice with different fields
    #[error("conflicting registrations for template '{template}'")]
    SchemaConflict { template: String },

    /// No schema registered for a template
    #[error("no schema registered for template '{template}'")]
    SchemaNotFound { template: String },
}
