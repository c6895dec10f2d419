//! Error types for the vector restructurer.

use thiserror::Error;

/// Unified error type for restructuring operations.
#[derive(Debug, Error)]
pub enum RestructureError {
    /// Configuration error (raised before any traversal)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A derived reference key would overwrite an existing key
    #[error("Key collision: extracting '{key}' would overwrite existing key '{derived}'")]
    KeyCollision { key: String, derived: String },

    /// A restructured document does not have the expected envelope shape
    #[error("Malformed restructured document: {0}")]
    MalformedResult(String),

    /// Vectors left in the store after restoring every reference
    #[error("Unreferenced vectors in store: {}", .0.join(", "))]
    UnreferencedVectors(Vec<String>),

    /// The same reference appears under more than one `_id` key
    #[error("Ambiguous reference: '{reference}' under '{key}' was already restored elsewhere")]
    AmbiguousReference { key: String, reference: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RestructureError {
    /// Returns true for errors raised while validating configuration.
    pub fn is_config(&self) -> bool {
        matches!(self, RestructureError::Config(_))
    }
}
