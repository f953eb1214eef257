//! Errors reported by the contract dispatcher.

use thiserror::Error;

use crate::project::services::{ErrorKind, ProjectServiceError};

use super::{Arity, Operation};

/// Dispatcher-level errors.
#[derive(Debug, Error)]
pub enum ContractError {
    /// The function name is not in the command table.
    #[error("unknown function invocation: {0}")]
    UnknownFunction(String),

    /// The argument count does not match the operation's arity.
    #[error("incorrect number of arguments for {operation}: expected {expected}, got {actual}")]
    IncorrectArgumentCount {
        /// Operation that was invoked.
        operation: Operation,
        /// Declared arity.
        expected: Arity,
        /// Number of arguments supplied.
        actual: usize,
    },

    /// The operation itself failed.
    #[error(transparent)]
    Service(#[from] ProjectServiceError),
}

impl ContractError {
    /// Returns the coarse classification of the error.
    ///
    /// Unknown functions and wrong argument counts are validation failures.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownFunction(_) | Self::IncorrectArgumentCount { .. } => {
                ErrorKind::Validation
            }
            Self::Service(err) => err.kind(),
        }
    }
}
