//! Error types for project domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing project domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// A required field is empty.
    #[error("{field} must be a non-empty string")]
    EmptyField {
        /// Caller-facing field name.
        field: &'static str,
    },

    /// A key field contains the composite-key delimiter.
    #[error("{field} must not contain U+0000: {value:?}")]
    ReservedCharacter {
        /// Caller-facing field name.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A numeric field did not parse as a non-negative integer.
    #[error("{field} must be a non-negative numeric string, got '{value}'")]
    InvalidNumber {
        /// Caller-facing field name.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An approval field holds something other than `Yes` or `No`.
    #[error("{field} must be 'Yes' or 'No', got '{value}'")]
    InvalidApproval {
        /// Caller-facing field name.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Error returned while parsing an approval value from its wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown approval value: {0}")]
pub struct ParseApprovalError(pub String);

/// Errors raised while converting a project to or from its stored bytes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectCodecError {
    /// The stored bytes are not a well-formed project document.
    #[error("malformed project document: {0}")]
    Malformed(String),

    /// The document belongs to a different object type.
    #[error("unexpected document type '{0}', expected 'project'")]
    UnexpectedDocType(String),

    /// The document parsed but holds invalid field values.
    #[error(transparent)]
    Invalid(#[from] ProjectDomainError),

    /// The project could not be serialized.
    #[error("failed to encode project: {0}")]
    Encode(String),
}
