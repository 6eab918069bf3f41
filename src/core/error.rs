//! Core error types.

use thiserror::Error;

/// Result type for core pipeline operations.
pub type CoreResult<T> = Result<T, CanvasError>;

/// Errors that can occur while evaluating, selecting, or aggregating
/// use cases.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// A use-case record carries a field the pipeline cannot accept.
    #[error("use case '{use_case}': invalid field '{field}': {reason}")]
    InvalidField {
        /// Id of the offending use case (or its title when the id is blank).
        use_case: String,
        /// Name of the offending field.
        field: String,
        /// Human-readable constraint that was violated.
        reason: String,
    },

    /// Two input records share the same id.
    #[error("duplicate use case id '{0}'")]
    DuplicateId(String),

    /// Input file extension is not a supported format.
    #[error("unsupported input format '{0}' (expected .json, .yaml, or .yml)")]
    UnsupportedFormat(String),

    /// IO error while reading input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML input.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CanvasError {
    /// Shorthand for a field-level precondition violation.
    pub fn invalid_field(
        use_case: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            use_case: use_case.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}
