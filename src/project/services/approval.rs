//! Approval workflow: authority sign-offs and city clearance.

use tracing::{info, warn};

use crate::project::{
    domain::{Authority, Project, ProjectName},
    ports::Ledger,
};

use super::{ProjectRecordStore, ProjectServiceError, ProjectServiceResult};

/// Approval workflow orchestration service.
///
/// Every operation reads the current record, changes only its own fields
/// and writes the record back immediately.
pub struct ApprovalWorkflowService<L>
where
    L: Ledger,
{
    store: ProjectRecordStore<L>,
}

impl<L> Clone for ApprovalWorkflowService<L>
where
    L: Ledger,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<L> ApprovalWorkflowService<L>
where
    L: Ledger,
{
    /// Creates a workflow service over a record store.
    #[must_use]
    pub const fn new(store: ProjectRecordStore<L>) -> Self {
        Self { store }
    }

    /// Records the lake authority sign-off.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError`] when the project is missing, cannot
    /// be decoded, or the write fails.
    pub fn authorize_lake(&self, name: &str) -> ProjectServiceResult<Project> {
        self.authorize(&ProjectName::new(name)?, Authority::Lake)
    }

    /// Records the forest authority sign-off.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError`] when the project is missing, cannot
    /// be decoded, or the write fails.
    pub fn authorize_forest(&self, name: &str) -> ProjectServiceResult<Project> {
        self.authorize(&ProjectName::new(name)?, Authority::Forest)
    }

    /// Obtains both authority sign-offs and clears the project.
    ///
    /// Both sign-offs are attempted and each commits on its own. A sign-off
    /// that succeeded stays committed when the other one fails; the failure
    /// is reported as [`ProjectServiceError::ApprovalFailed`].
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project is missing,
    /// [`ProjectServiceError::ApprovalFailed`] when a sign-off fails, or any
    /// read/write error from the final update.
    pub fn aggregate_status(&self, name: &str) -> ProjectServiceResult<Project> {
        let key = ProjectName::new(name)?;
        self.store.fetch(&key)?;
        info!(project = %key, "requesting aggregate approval");

        let lake = self.authorize(&key, Authority::Lake);
        let forest = self.authorize(&key, Authority::Forest);
        for (authority, outcome) in [(Authority::Lake, lake), (Authority::Forest, forest)] {
            if let Err(err) = outcome {
                warn!(project = %key, %authority, error = %err, "approval not acquired");
                return Err(ProjectServiceError::ApprovalFailed {
                    authority,
                    source: Box::new(err),
                });
            }
        }

        let mut approved = self.store.fetch(&key)?;
        approved.grant_city_clearance();
        self.store.update(&key, &approved)?;

        info!(project = %key, "project cleared for city development");
        Ok(approved)
    }

    fn authorize(&self, key: &ProjectName, authority: Authority) -> ProjectServiceResult<Project> {
        let mut project = self.store.fetch(key)?;
        info!(project = %key, %authority, "recording authority approval");

        match authority {
            Authority::Lake => project.grant_lake_approval(),
            Authority::Forest => project.grant_forest_approval(),
        }
        self.store.update(key, &project)?;

        info!(project = %key, %authority, "authority approval recorded");
        Ok(project)
    }
}
