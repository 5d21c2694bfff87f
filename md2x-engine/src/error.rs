//! Error types for option parsing and validation
//!
//! Conversion itself never fails. These errors only surface when a caller
//! asks for strict parsing of option names or validates a configuration
//! before handing it to the engine.

use thiserror::Error;

/// Errors produced while parsing or validating [`crate::ConvertOptions`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Mode name is not `article` or `thread`
    #[error("unknown mode '{0}' (expected 'article' or 'thread')")]
    UnknownMode(String),
    /// Code style name is not one of the supported renderings
    #[error("unknown code style '{0}' (expected 'inline', 'blockquote' or 'plain')")]
    UnknownCodeStyle(String),
    /// Thread segments need room for at least one character
    #[error("max length must be a positive number of characters, got {0}")]
    InvalidMaxLength(usize),
}
