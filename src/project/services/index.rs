//! Secondary index pairing each project with its location.

use std::sync::Arc;

use tracing::debug;

use crate::project::{
    domain::{Location, ProjectName},
    ports::Ledger,
};

use super::ProjectServiceResult;

/// Default namespace of the `(location, name)` index.
pub const DEFAULT_INDEX_NAMESPACE: &str = "project~name";

/// Sentinel stored under each index key; only its presence matters.
const INDEX_SENTINEL: [u8; 1] = [0x00];

/// Maintains the `(location, name)` composite index entries.
pub struct ProjectIndexManager<L>
where
    L: Ledger,
{
    ledger: Arc<L>,
    namespace: String,
}

impl<L> Clone for ProjectIndexManager<L>
where
    L: Ledger,
{
    fn clone(&self) -> Self {
        Self {
            ledger: Arc::clone(&self.ledger),
            namespace: self.namespace.clone(),
        }
    }
}

impl<L> ProjectIndexManager<L>
where
    L: Ledger,
{
    /// Creates an index manager using [`DEFAULT_INDEX_NAMESPACE`].
    #[must_use]
    pub fn new(ledger: Arc<L>) -> Self {
        Self::with_namespace(ledger, DEFAULT_INDEX_NAMESPACE)
    }

    /// Creates an index manager writing under a custom namespace.
    #[must_use]
    pub fn with_namespace(ledger: Arc<L>, namespace: impl Into<String>) -> Self {
        Self {
            ledger,
            namespace: namespace.into(),
        }
    }

    /// Returns the index namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Builds the index key for a `(location, name)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`super::ProjectServiceError::Store`] when the ledger rejects
    /// the key components.
    pub fn index_key(&self, location: &Location, name: &ProjectName) -> ProjectServiceResult<String> {
        Ok(self
            .ledger
            .create_composite_key(&self.namespace, &[location.as_str(), name.as_str()])?)
    }

    /// Writes the index entry for a newly registered project.
    ///
    /// # Errors
    ///
    /// Returns [`super::ProjectServiceError::Store`] when the key cannot be
    /// built or written.
    pub fn create_index(&self, location: &Location, name: &ProjectName) -> ProjectServiceResult<()> {
        let key = self.index_key(location, name)?;
        self.create_index_at(&key, name)?;
        debug!(location = %location, "index entry created");
        Ok(())
    }

    /// Writes the sentinel under an index key built by [`Self::index_key`].
    pub(crate) fn create_index_at(&self, key: &str, name: &ProjectName) -> ProjectServiceResult<()> {
        self.ledger.put_state(key, &INDEX_SENTINEL)?;
        debug!(project = %name, "index sentinel written");
        Ok(())
    }

    /// Removes the index entry of a deleted project.
    ///
    /// # Errors
    ///
    /// Returns [`super::ProjectServiceError::Store`] when the key cannot be
    /// built or deleted.
    pub fn delete_index(&self, location: &Location, name: &ProjectName) -> ProjectServiceResult<()> {
        let key = self.index_key(location, name)?;
        self.ledger.delete_state(&key)?;
        debug!(project = %name, location = %location, "index entry deleted");
        Ok(())
    }

    /// Reports whether an index entry exists for the pair.
    ///
    /// # Errors
    ///
    /// Returns [`super::ProjectServiceError::Store`] when the ledger read
    /// fails.
    pub fn index_exists(&self, location: &Location, name: &ProjectName) -> ProjectServiceResult<bool> {
        let key = self.index_key(location, name)?;
        Ok(self.ledger.get_state(&key)?.is_some())
    }
}
