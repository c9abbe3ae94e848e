//! Error types for overlay domain parsing.

use thiserror::Error;

/// A string did not name a member of a field enumeration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct ParseFieldError {
    /// Which enumeration was parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseFieldError {
    /// Creates a parse error for `kind`.
    #[must_use]
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Errors raised while reading a pasted overlay configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OverlayConfigurationError {
    /// Nothing was pasted, or the object has no entries.
    #[error("overlay configuration is empty")]
    Empty,

    /// The text is not valid JSON.
    #[error("overlay configuration is not valid JSON: {0}")]
    InvalidJson(String),

    /// The JSON document is not an object.
    #[error("overlay configuration must be a JSON object")]
    NotAnObject,

    /// An entry has a blank key.
    #[error("overlay configuration keys must not be blank")]
    EmptyKey,

    /// An entry holds a value an overlay field cannot take.
    #[error("unsupported value for overlay field '{key}': {reason}")]
    UnsupportedValue {
        /// Offending key.
        key: String,
        /// Why the value was refused.
        reason: String,
    },
}
