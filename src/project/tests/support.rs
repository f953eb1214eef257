//! Shared ledger doubles for project service tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use mockall::mock;

use crate::project::{
    adapters::memory::InMemoryLedger,
    ports::{HistoryCursor, KeyModification, Ledger, LedgerError, LedgerResult},
    services::RegisterProjectRequest,
};

mock! {
    pub LedgerPort {}

    impl Ledger for LedgerPort {
        fn get_state(&self, key: &str) -> LedgerResult<Option<Vec<u8>>>;
        fn put_state(&self, key: &str, value: &[u8]) -> LedgerResult<()>;
        fn delete_state(&self, key: &str) -> LedgerResult<()>;
        fn history_for_key(&self, key: &str) -> LedgerResult<HistoryCursor>;
    }
}

/// Builds a ledger failure for mock expectations.
pub fn outage() -> LedgerError {
    LedgerError::unavailable(std::io::Error::other("peer unreachable"))
}

/// Registration request used across service tests.
pub fn riverside_request() -> RegisterProjectRequest {
    RegisterProjectRequest::new("chennai", "riverside", "101", "55", "No", "No", "No", "No")
}

/// In-memory ledger whose writes start failing after a fixed budget.
pub struct FlakyLedger {
    inner: InMemoryLedger,
    writes_left: AtomicUsize,
}

impl FlakyLedger {
    pub fn new(inner: InMemoryLedger, successful_writes: usize) -> Self {
        Self {
            inner,
            writes_left: AtomicUsize::new(successful_writes),
        }
    }

    fn spend_write(&self) -> LedgerResult<()> {
        self.writes_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .map(|_| ())
            .map_err(|_| outage())
    }
}

impl Ledger for FlakyLedger {
    fn get_state(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        self.inner.get_state(key)
    }

    fn put_state(&self, key: &str, value: &[u8]) -> LedgerResult<()> {
        self.spend_write()?;
        self.inner.put_state(key, value)
    }

    fn delete_state(&self, key: &str) -> LedgerResult<()> {
        self.spend_write()?;
        self.inner.delete_state(key)
    }

    fn history_for_key(&self, key: &str) -> LedgerResult<HistoryCursor> {
        self.inner.history_for_key(key)
    }
}

/// Cursor that replays scripted items and flags when it is dropped.
pub struct ScriptedCursor {
    items: std::vec::IntoIter<LedgerResult<KeyModification>>,
    released: Arc<AtomicBool>,
}

impl ScriptedCursor {
    pub fn boxed(
        items: Vec<LedgerResult<KeyModification>>,
        released: &Arc<AtomicBool>,
    ) -> HistoryCursor {
        Box::new(Self {
            items: items.into_iter(),
            released: Arc::clone(released),
        })
    }
}

impl Iterator for ScriptedCursor {
    type Item = LedgerResult<KeyModification>;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }
}

impl Drop for ScriptedCursor {
    fn drop(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}
