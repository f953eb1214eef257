//! History reader: the audit trail of a project record.

use std::sync::Arc;

use chrono::DateTime;
use tracing::info;

use crate::project::{
    domain::{HistoryEntry, HistoryRecord, ProjectCodecError, ProjectName},
    ports::{HistoryCursor, KeyModification, Ledger, LedgerError},
};

use super::{ProjectServiceError, ProjectServiceResult};

/// Reads the committed versions of project records.
pub struct ProjectHistoryReader<L>
where
    L: Ledger,
{
    ledger: Arc<L>,
}

impl<L> Clone for ProjectHistoryReader<L>
where
    L: Ledger,
{
    fn clone(&self) -> Self {
        Self {
            ledger: Arc::clone(&self.ledger),
        }
    }
}

impl<L> ProjectHistoryReader<L>
where
    L: Ledger,
{
    /// Creates a history reader over a ledger.
    #[must_use]
    pub const fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    /// Opens the history of a project, oldest version first.
    ///
    /// The history is available after the project has been removed.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Validation`] for an invalid name or
    /// [`ProjectServiceError::Store`] when the ledger cannot open the
    /// history.
    pub fn history(&self, name: &str) -> ProjectServiceResult<ProjectHistory> {
        let project_name = ProjectName::new(name)?;
        info!(project = %project_name, "reading project history");
        let cursor = self.ledger.history_for_key(project_name.as_str())?;
        Ok(ProjectHistory {
            name: project_name,
            cursor: Some(cursor),
        })
    }
}

/// Lazy, single-pass sequence of a project's history entries.
///
/// Entries are yielded in ledger order. The ledger cursor is released as
/// soon as it is exhausted, fails, or this value is dropped.
pub struct ProjectHistory {
    name: ProjectName,
    cursor: Option<HistoryCursor>,
}

impl ProjectHistory {
    /// Returns the project whose history is being read.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Collects the remaining entries into their report form.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the ledger cursor.
    pub fn into_records(self) -> ProjectServiceResult<Vec<HistoryRecord>> {
        let name = self.name.clone();
        self.map(|entry| {
            let entry = entry?;
            entry
                .to_record()
                .map_err(|source| ProjectServiceError::Decode {
                    name: name.clone(),
                    source,
                })
        })
        .collect()
    }

    /// Renders the remaining entries as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the ledger cursor.
    pub fn into_json(self) -> ProjectServiceResult<Vec<u8>> {
        let name = self.name.clone();
        let records = self.into_records()?;
        serde_json::to_vec(&records).map_err(|err| ProjectServiceError::Decode {
            name,
            source: ProjectCodecError::Encode(err.to_string()),
        })
    }
}

impl Iterator for ProjectHistory {
    type Item = ProjectServiceResult<HistoryEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.as_mut()?;
        let item = match cursor.next() {
            Some(Ok(modification)) => to_entry(modification),
            Some(Err(err)) => Err(err.into()),
            None => {
                self.cursor = None;
                return None;
            }
        };
        if item.is_err() {
            self.cursor = None;
        }
        Some(item)
    }
}

fn to_entry(modification: KeyModification) -> ProjectServiceResult<HistoryEntry> {
    let KeyModification {
        tx_id,
        value,
        timestamp,
        is_delete,
    } = modification;
    let invalid = LedgerError::InvalidTimestamp {
        seconds: timestamp.seconds,
        nanos: timestamp.nanos,
    };
    let nanos = u32::try_from(timestamp.nanos).map_err(|_| invalid.clone())?;
    let committed_at = DateTime::from_timestamp(timestamp.seconds, nanos).ok_or(invalid)?;
    Ok(HistoryEntry::new(tx_id, value, committed_at, is_delete))
}
