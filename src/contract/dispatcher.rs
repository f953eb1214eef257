//! Contract entry points: resolve an invocation and run it.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::project::{
    ports::Ledger,
    services::{
        ApprovalWorkflowService, ProjectHistoryReader, ProjectIndexManager, ProjectRecordStore,
        ProjectServiceError,
    },
};

use super::{Command, ConfigError, ContractConfig, ContractError, ContractResponse};

/// Project approval contract bound to a ledger.
pub struct ProjectContract<L>
where
    L: Ledger,
{
    store: ProjectRecordStore<L>,
    workflow: ApprovalWorkflowService<L>,
    history: ProjectHistoryReader<L>,
    config: ContractConfig,
}

impl<L> ProjectContract<L>
where
    L: Ledger,
{
    /// Creates a contract with the default configuration.
    #[must_use]
    pub fn new(ledger: Arc<L>) -> Self {
        Self::build(ledger, ContractConfig::default())
    }

    /// Creates a contract with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration fails
    /// [`ContractConfig::validate`].
    pub fn with_config(ledger: Arc<L>, config: ContractConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(ledger, config))
    }

    fn build(ledger: Arc<L>, config: ContractConfig) -> Self {
        let index =
            ProjectIndexManager::with_namespace(Arc::clone(&ledger), config.index_namespace.clone());
        let store = ProjectRecordStore::with_index(Arc::clone(&ledger), index);
        Self {
            workflow: ApprovalWorkflowService::new(store.clone()),
            history: ProjectHistoryReader::new(ledger),
            store,
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Returns the record store used by the contract.
    #[must_use]
    pub const fn store(&self) -> &ProjectRecordStore<L> {
        &self.store
    }

    /// Handles contract instantiation. There is no state to seed.
    #[must_use]
    pub fn init(&self) -> ContractResponse {
        info!("project contract initialized");
        ContractResponse::success(Vec::new())
    }

    /// Runs an invocation and wraps the outcome in a response envelope.
    #[must_use]
    pub fn invoke<S>(&self, function: &str, args: &[S]) -> ContractResponse
    where
        S: AsRef<str>,
    {
        info!(function, "invoke is running");
        match self.try_invoke(function, args) {
            Ok(payload) => ContractResponse::success(payload),
            Err(err) => {
                warn!(function, error = %err, "invocation failed");
                ContractResponse::error(err.to_string())
            }
        }
    }

    /// Runs an invocation, returning its payload.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError`] when the function is unknown, the argument
    /// count is wrong, or the operation fails.
    pub fn try_invoke<S>(&self, function: &str, args: &[S]) -> Result<Vec<u8>, ContractError>
    where
        S: AsRef<str>,
    {
        let command = Command::parse(function, args)?;
        self.execute(command)
    }

    /// Runs an already-resolved command.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Service`] when the operation fails.
    pub fn execute(&self, command: Command) -> Result<Vec<u8>, ContractError> {
        let payload = match command {
            Command::Register(request) => {
                self.store.register(request)?;
                Vec::new()
            }
            Command::Read { name } => {
                let project = self.store.read(&name)?;
                project
                    .encode()
                    .map_err(|source| ProjectServiceError::Decode {
                        name: project.name().clone(),
                        source,
                    })?
            }
            Command::Remove { name } => {
                self.store.remove(&name)?;
                Vec::new()
            }
            Command::AggregateStatus { name } => {
                self.workflow.aggregate_status(&name)?;
                Vec::new()
            }
            Command::AuthorizeLake { name } => {
                self.workflow.authorize_lake(&name)?;
                Vec::new()
            }
            Command::AuthorizeForest { name } => {
                self.workflow.authorize_forest(&name)?;
                Vec::new()
            }
            Command::History { name } => {
                let payload = self.history.history(&name)?.into_json()?;
                if self.config.log_history_payload {
                    debug!(
                        project = %name,
                        payload = %String::from_utf8_lossy(&payload),
                        "history payload rendered"
                    );
                }
                payload
            }
        };
        Ok(payload)
    }
}
