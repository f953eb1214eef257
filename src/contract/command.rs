//! Command table mapping operation names to typed commands.

use std::fmt;

use crate::project::services::RegisterProjectRequest;

use super::ContractError;

/// Declared argument count of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// The operation takes exactly this many arguments.
    Exactly(usize),
    /// The operation takes at least this many arguments; extras are ignored.
    AtLeast(usize),
}

impl Arity {
    /// Returns `true` when `count` arguments satisfy this arity.
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exactly(expected) => count == expected,
            Self::AtLeast(minimum) => count >= minimum,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(expected) => write!(f, "exactly {expected}"),
            Self::AtLeast(minimum) => write!(f, "at least {minimum}"),
        }
    }
}

/// Operations exposed by the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Register a new project.
    Register,
    /// Read a project.
    Read,
    /// Remove a project and its index entry.
    Remove,
    /// Obtain both sign-offs and clear the project.
    AggregateStatus,
    /// Record the lake authority sign-off.
    AuthorizeLake,
    /// Record the forest authority sign-off.
    AuthorizeForest,
    /// Report the project's version history.
    History,
}

impl Operation {
    /// Every operation, in table order.
    pub const ALL: [Self; 7] = [
        Self::Register,
        Self::Read,
        Self::Remove,
        Self::AggregateStatus,
        Self::AuthorizeLake,
        Self::AuthorizeForest,
        Self::History,
    ];

    /// Returns the canonical function name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Read => "Read",
            Self::Remove => "Remove",
            Self::AggregateStatus => "AggregateStatus",
            Self::AuthorizeLake => "AuthorizeLake",
            Self::AuthorizeForest => "AuthorizeForest",
            Self::History => "History",
        }
    }

    /// Returns the function name used by earlier deployments.
    #[must_use]
    pub const fn legacy_name(self) -> &'static str {
        match self {
            Self::Register => "NocRequest",
            Self::Read => "readProject",
            Self::Remove => "delete",
            Self::AggregateStatus => "BDAProjectStatus",
            Self::AuthorizeLake => "LakeAuthRequest",
            Self::AuthorizeForest => "ForestAuthRequest",
            Self::History => "getHistoryForProject",
        }
    }

    /// Returns the declared argument count.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Register => Arity::Exactly(8),
            Self::Read | Self::Remove => Arity::Exactly(1),
            Self::AggregateStatus | Self::AuthorizeLake | Self::AuthorizeForest | Self::History => {
                Arity::AtLeast(1)
            }
        }
    }

    /// Resolves a function name, canonical or legacy.
    #[must_use]
    pub fn from_function(function: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.name() == function || operation.legacy_name() == function)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved invocation with its arguments bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new project.
    Register(RegisterProjectRequest),
    /// Read a project.
    Read {
        /// Project name.
        name: String,
    },
    /// Remove a project.
    Remove {
        /// Project name.
        name: String,
    },
    /// Obtain both sign-offs and clear the project.
    AggregateStatus {
        /// Project name.
        name: String,
    },
    /// Record the lake authority sign-off.
    AuthorizeLake {
        /// Project name.
        name: String,
    },
    /// Record the forest authority sign-off.
    AuthorizeForest {
        /// Project name.
        name: String,
    },
    /// Report the project's version history.
    History {
        /// Project name.
        name: String,
    },
}

impl Command {
    /// Resolves a function name and binds its positional arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::UnknownFunction`] for an unrecognized name or
    /// [`ContractError::IncorrectArgumentCount`] when the argument count does
    /// not match the operation's arity.
    pub fn parse<S>(function: &str, args: &[S]) -> Result<Self, ContractError>
    where
        S: AsRef<str>,
    {
        let operation = Operation::from_function(function)
            .ok_or_else(|| ContractError::UnknownFunction(function.to_owned()))?;
        let expected = operation.arity();
        if !expected.accepts(args.len()) {
            return Err(ContractError::IncorrectArgumentCount {
                operation,
                expected,
                actual: args.len(),
            });
        }

        let arg = |position: usize| {
            args.get(position)
                .map(|value| value.as_ref().to_owned())
                .unwrap_or_default()
        };

        let command = match operation {
            Operation::Register => Self::Register(RegisterProjectRequest::new(
                arg(0),
                arg(1),
                arg(2),
                arg(3),
                arg(4),
                arg(5),
                arg(6),
                arg(7),
            )),
            Operation::Read => Self::Read { name: arg(0) },
            Operation::Remove => Self::Remove { name: arg(0) },
            Operation::AggregateStatus => Self::AggregateStatus { name: arg(0) },
            Operation::AuthorizeLake => Self::AuthorizeLake { name: arg(0) },
            Operation::AuthorizeForest => Self::AuthorizeForest { name: arg(0) },
            Operation::History => Self::History { name: arg(0) },
        };
        Ok(command)
    }

    /// Returns the operation this command invokes.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::Register(_) => Operation::Register,
            Self::Read { .. } => Operation::Read,
            Self::Remove { .. } => Operation::Remove,
            Self::AggregateStatus { .. } => Operation::AggregateStatus,
            Self::AuthorizeLake { .. } => Operation::AuthorizeLake,
            Self::AuthorizeForest { .. } => Operation::AuthorizeForest,
            Self::History { .. } => Operation::History,
        }
    }
}
