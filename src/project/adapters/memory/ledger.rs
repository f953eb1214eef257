//! In-memory versioned ledger for tests and embedded use.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mockable::{Clock, DefaultClock};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::project::ports::{
    HistoryCursor, KeyModification, Ledger, LedgerError, LedgerResult, LedgerTimestamp,
};

/// Thread-safe in-memory ledger keeping every committed version of a key.
///
/// Each write commits immediately under a fresh transaction identifier.
pub struct InMemoryLedger<C = DefaultClock> {
    state: Arc<RwLock<LedgerState>>,
    open_cursors: Arc<AtomicUsize>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct LedgerState {
    world: HashMap<String, Vec<u8>>,
    log: HashMap<String, Vec<KeyModification>>,
}

impl<C> Clone for InMemoryLedger<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            open_cursors: Arc::clone(&self.open_cursors),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl InMemoryLedger<DefaultClock> {
    /// Creates an empty ledger stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryLedger<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryLedger<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty ledger stamped by the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(LedgerState::default())),
            open_cursors: Arc::new(AtomicUsize::new(0)),
            clock,
        }
    }

    /// Returns the number of history cursors that have not been dropped.
    #[must_use]
    pub fn open_history_cursors(&self) -> usize {
        self.open_cursors.load(Ordering::SeqCst)
    }

    /// Returns every live key in lexical order.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Unavailable`] if the state lock is poisoned.
    pub fn keys(&self) -> LedgerResult<Vec<String>> {
        let state = self.read_state()?;
        let mut keys: Vec<String> = state.world.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    fn read_state(&self) -> LedgerResult<RwLockReadGuard<'_, LedgerState>> {
        self.state
            .read()
            .map_err(|err| LedgerError::unavailable(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> LedgerResult<RwLockWriteGuard<'_, LedgerState>> {
        self.state
            .write()
            .map_err(|err| LedgerError::unavailable(std::io::Error::other(err.to_string())))
    }

    fn now(&self) -> LedgerResult<LedgerTimestamp> {
        let now = self.clock.utc();
        let seconds = now.timestamp();
        let subsec = now.timestamp_subsec_nanos();
        let nanos = i32::try_from(subsec).map_err(|_| LedgerError::InvalidTimestamp {
            seconds,
            nanos: i32::MAX,
        })?;
        Ok(LedgerTimestamp { seconds, nanos })
    }

    /// Applies a write or delete and appends it to the key's history.
    fn commit(&self, key: &str, value: Option<Vec<u8>>) -> LedgerResult<()> {
        validate_key(key)?;
        let modification = KeyModification {
            tx_id: next_tx_id(),
            value: value.clone(),
            timestamp: self.now()?,
            is_delete: value.is_none(),
        };

        let mut state = self.write_state()?;
        match value {
            Some(bytes) => {
                state.world.insert(key.to_owned(), bytes);
            }
            None => {
                state.world.remove(key);
            }
        }
        state
            .log
            .entry(key.to_owned())
            .or_default()
            .push(modification);
        Ok(())
    }
}

impl<C> Ledger for InMemoryLedger<C>
where
    C: Clock + Send + Sync + 'static,
{
    fn get_state(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        validate_key(key)?;
        let state = self.read_state()?;
        Ok(state.world.get(key).cloned())
    }

    fn put_state(&self, key: &str, value: &[u8]) -> LedgerResult<()> {
        self.commit(key, Some(value.to_vec()))
    }

    fn delete_state(&self, key: &str) -> LedgerResult<()> {
        self.commit(key, None)
    }

    fn history_for_key(&self, key: &str) -> LedgerResult<HistoryCursor> {
        validate_key(key)?;
        let entries = {
            let state = self.read_state()?;
            state.log.get(key).cloned().unwrap_or_default()
        };
        self.open_cursors.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(InMemoryHistoryCursor {
            entries: entries.into_iter(),
            open_cursors: Arc::clone(&self.open_cursors),
        }))
    }
}

fn validate_key(key: &str) -> LedgerResult<()> {
    if key.is_empty() {
        return Err(LedgerError::InvalidKey("key must not be empty".to_owned()));
    }
    Ok(())
}

/// Derives a hex transaction identifier from a random nonce.
fn next_tx_id() -> String {
    let mut hasher = Sha256::new();
    hasher.update(Uuid::new_v4().as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Snapshot cursor over a key's history; releases its slot on drop.
struct InMemoryHistoryCursor {
    entries: std::vec::IntoIter<KeyModification>,
    open_cursors: Arc<AtomicUsize>,
}

impl Iterator for InMemoryHistoryCursor {
    type Item = LedgerResult<KeyModification>;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(Ok)
    }
}

impl Drop for InMemoryHistoryCursor {
    fn drop(&mut self) {
        self.open_cursors.fetch_sub(1, Ordering::SeqCst);
    }
}
