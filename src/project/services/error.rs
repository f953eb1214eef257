//! Service-level errors shared by project services.

use crate::project::{
    domain::{Authority, ProjectCodecError, ProjectDomainError, ProjectName},
    ports::LedgerError,
};
use thiserror::Error;

/// Coarse classification of a service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller input failed validation.
    Validation,
    /// A record with the same name already exists.
    AlreadyExists,
    /// The named record does not exist.
    NotFound,
    /// Stored bytes could not be decoded or encoded.
    Decode,
    /// The ledger call failed.
    Store,
}

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ProjectDomainError),

    /// Registration targeted a name that is already taken.
    #[error("this project already exists: {0}")]
    AlreadyExists(ProjectName),

    /// The project does not exist.
    #[error("project does not exist: {0}")]
    NotFound(ProjectName),

    /// The stored record could not be converted.
    #[error("failed to decode project {name}: {source}")]
    Decode {
        /// Key of the offending record.
        name: ProjectName,
        /// Underlying codec error.
        source: ProjectCodecError,
    },

    /// A ledger call failed.
    #[error(transparent)]
    Store(#[from] LedgerError),

    /// One of the authority sign-offs in an aggregate approval failed.
    #[error("project failed to acquire {authority} approval: {source}")]
    ApprovalFailed {
        /// Authority whose sign-off failed.
        authority: Authority,
        /// Error reported by the sign-off.
        source: Box<Self>,
    },
}

impl ProjectServiceError {
    /// Returns the coarse classification of the error.
    ///
    /// An aggregate approval failure takes the kind of its cause.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Store(_) => ErrorKind::Store,
            Self::ApprovalFailed { source, .. } => source.kind(),
        }
    }
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;
