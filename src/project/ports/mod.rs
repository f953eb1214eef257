//! Port contracts for project approval tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by project services.

pub mod ledger;

pub use ledger::{
    COMPOSITE_KEY_DELIMITER, HistoryCursor, KeyModification, Ledger, LedgerError, LedgerResult,
    LedgerTimestamp, composite_key,
};
