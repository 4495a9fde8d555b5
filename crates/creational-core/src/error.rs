//! Error taxonomy for the creation layer

use thiserror::Error;

/// Result alias used throughout the creation layer
pub type Result<T> = std::result::Result<T, CreationError>;

/// Failures a single creation call can report.
///
/// Every variant is a synchronous failure of the call that produced it.
/// Nothing is retried internally and no partial state is left behind.
#[derive(Debug, Error)]
pub enum CreationError {
    /// A selector value did not map to any known variant
    #[error("invalid {kind} selector: '{value}'")]
    InvalidSelector { kind: &'static str, value: String },

    /// A builder was asked to build with a missing or invalid required field
    #[error("{reason}")]
    ValidationFailed { field: &'static str, reason: String },

    /// Registration was attempted with an empty or blank key
    #[error("Key cannot be empty.")]
    InvalidKey,

    /// No prototype is registered under the requested key
    #[error("Prototype '{key}' not found.")]
    NotFound { key: String },

    /// A bundled YAML catalog could not be parsed
    #[error("failed to parse bundled {what} catalog")]
    Catalog {
        what: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
}

impl CreationError {
    pub(crate) fn invalid_selector(kind: &'static str, value: impl ToString) -> Self {
        Self::InvalidSelector {
            kind,
            value: value.to_string(),
        }
    }

    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field,
            reason: reason.into(),
        }
    }
}
