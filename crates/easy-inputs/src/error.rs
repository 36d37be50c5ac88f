//! Error types for form configuration.
//!
//! Rendering itself never fails. Errors only come from building a form or
//! loading declarations out of JSON.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// The JSON could not be parsed or had the wrong top-level shape.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A form or group was declared without a name.
    #[error("missing name for {0}")]
    MissingName(&'static str),
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, FormError>;
