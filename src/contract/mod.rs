//! Contract surface: named operations dispatched onto project services.
//!
//! Callers invoke an operation by name with positional string arguments.
//! [`Command::parse`] resolves the name through a fixed command table,
//! checks the declared arity, and binds the arguments. [`ProjectContract`]
//! runs the command and wraps the result in a [`ContractResponse`].

mod command;
mod config;
mod dispatcher;
mod error;
mod response;

pub use command::{Arity, Command, Operation};
pub use config::{ConfigError, ContractConfig};
pub use dispatcher::ProjectContract;
pub use error::ContractError;
pub use response::{ContractResponse, ResponseStatus};
