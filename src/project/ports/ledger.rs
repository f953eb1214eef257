//! Ledger port: the versioned key-value store supplied by the host.

use std::sync::Arc;
use thiserror::Error;

/// Delimiter placed around every composite-key component.
pub const COMPOSITE_KEY_DELIMITER: char = '\u{0}';

/// Largest Unicode scalar value, reserved for range-scan sentinels.
const MAX_UNICODE_RUNE: char = '\u{10FFFF}';

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Cursor over the committed versions of a single key.
///
/// The cursor holds ledger resources until it is dropped.
pub type HistoryCursor = Box<dyn Iterator<Item = LedgerResult<KeyModification>> + Send>;

/// Commit timestamp as delivered by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LedgerTimestamp {
    /// Seconds since the Unix epoch.
    pub seconds: i64,
    /// Nanosecond offset within the second.
    pub nanos: i32,
}

/// One committed modification of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyModification {
    /// Identifier of the committing transaction.
    pub tx_id: String,
    /// Written value; absent for deletes.
    pub value: Option<Vec<u8>>,
    /// Commit timestamp.
    pub timestamp: LedgerTimestamp,
    /// Whether the modification deleted the key.
    pub is_delete: bool,
}

/// Versioned key-value ledger contract.
///
/// Implementations provide per-key mutual exclusion and durability for the
/// duration of a transaction.
pub trait Ledger: Send + Sync {
    /// Reads the current value of a key.
    ///
    /// Returns `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] when the ledger cannot be read.
    fn get_state(&self, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Writes a value under a key.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] when the key is invalid or the write fails.
    fn put_state(&self, key: &str, value: &[u8]) -> LedgerResult<()>;

    /// Deletes a key.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] when the key is invalid or the delete fails.
    fn delete_state(&self, key: &str) -> LedgerResult<()>;

    /// Opens a cursor over the committed versions of a key, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] when the history cannot be opened.
    fn history_for_key(&self, key: &str) -> LedgerResult<HistoryCursor>;

    /// Builds a composite key from an object type and ordered attributes.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidCompositeKey`] when a component
    /// contains a reserved character or the object type is empty.
    fn create_composite_key(&self, object_type: &str, attributes: &[&str]) -> LedgerResult<String> {
        composite_key(object_type, attributes)
    }
}

/// Builds a composite key as `U+0000 type U+0000 (attr U+0000)*`.
///
/// Simple keys never start with `U+0000`, so composite keys cannot collide
/// with them.
///
/// # Errors
///
/// Returns [`LedgerError::InvalidCompositeKey`] when the object type is
/// empty or a component contains `U+0000` or `U+10FFFF`.
pub fn composite_key(object_type: &str, attributes: &[&str]) -> LedgerResult<String> {
    if object_type.is_empty() {
        return Err(LedgerError::InvalidCompositeKey(
            "object type must not be empty".to_owned(),
        ));
    }
    validate_component(object_type)?;

    let mut key = String::new();
    key.push(COMPOSITE_KEY_DELIMITER);
    key.push_str(object_type);
    key.push(COMPOSITE_KEY_DELIMITER);
    for attribute in attributes {
        validate_component(attribute)?;
        key.push_str(attribute);
        key.push(COMPOSITE_KEY_DELIMITER);
    }
    Ok(key)
}

fn validate_component(component: &str) -> LedgerResult<()> {
    if component.contains([COMPOSITE_KEY_DELIMITER, MAX_UNICODE_RUNE]) {
        return Err(LedgerError::InvalidCompositeKey(format!(
            "component {component:?} contains a reserved character"
        )));
    }
    Ok(())
}

/// Errors returned by ledger implementations.
#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    /// The key is not acceptable to the ledger.
    #[error("invalid ledger key: {0}")]
    InvalidKey(String),

    /// A composite-key component is invalid.
    #[error("invalid composite key: {0}")]
    InvalidCompositeKey(String),

    /// A history entry carries a timestamp outside the representable range.
    #[error("invalid ledger timestamp {seconds}s {nanos}ns")]
    InvalidTimestamp {
        /// Seconds component.
        seconds: i64,
        /// Nanoseconds component.
        nanos: i32,
    },

    /// The ledger could not complete the request.
    #[error("ledger unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl LedgerError {
    /// Wraps an underlying ledger failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
