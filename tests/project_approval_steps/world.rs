//! Shared world state for project approval BDD scenarios.

use std::sync::Arc;

use clearance::{
    contract::{ContractError, ProjectContract},
    project::adapters::memory::InMemoryLedger,
};
use rstest::fixture;

/// Contract type used by the BDD world.
pub type TestContract = ProjectContract<InMemoryLedger>;

/// Scenario world for project approval behaviour tests.
pub struct ProjectWorld {
    pub contract: TestContract,
    pub pending_registration: Option<Vec<String>>,
    pub last_result: Option<Result<Vec<u8>, ContractError>>,
    pub failures: Vec<String>,
}

impl ProjectWorld {
    /// Creates a world over an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            contract: ProjectContract::new(Arc::new(InMemoryLedger::new())),
            pending_registration: None,
            last_result: None,
            failures: Vec::new(),
        }
    }

    /// Returns the arguments of the pending registration.
    ///
    /// # Errors
    ///
    /// Returns an error if no registration has been described yet.
    pub fn registration_args(&self) -> Result<Vec<String>, eyre::Report> {
        self.pending_registration
            .clone()
            .ok_or_else(|| eyre::eyre!("missing pending registration in scenario world"))
    }

    /// Records the outcome of an invocation made by a step.
    pub fn record(&mut self, function: &str, result: Result<Vec<u8>, ContractError>) {
        if let Err(ref err) = result {
            self.failures.push(format!("{function}: {err}"));
        }
        self.last_result = Some(result);
    }

    /// Returns the outcome of the last invocation.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing has been invoked yet.
    pub fn last_result(&self) -> Result<&Result<Vec<u8>, ContractError>, eyre::Report> {
        self.last_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing invocation result in scenario world"))
    }
}

impl Default for ProjectWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectWorld {
    ProjectWorld::default()
}
